use tauri::{AppHandle, Manager, Runtime};

use crate::{app_lifecycle, app_types::ShellState};

#[tauri::command]
pub(crate) fn greet<R: Runtime>(app_handle: AppHandle<R>, name: String) -> String {
    let state = app_handle.state::<ShellState<R>>();
    state
        .with_app("greet", |app| app.greet(&name))
        .unwrap_or_else(|| app_lifecycle::greeting(&name))
}

/// Lets the webview observe the config value the shell started with.
#[tauri::command]
pub(crate) fn loaded_config<R: Runtime>(app_handle: AppHandle<R>) -> String {
    let state = app_handle.state::<ShellState<R>>();
    state
        .with_app("loaded_config", |app| app.config.config_data.clone())
        .unwrap_or_default()
}
