#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_config;
mod app_constants;
mod app_lifecycle;
mod app_runtime;
mod app_types;
mod bridge_commands;
mod logging;
mod runtime_paths;

pub(crate) use app_config::AppConfig;
pub(crate) use app_constants::*;
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
