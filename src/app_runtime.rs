use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    app_config,
    app_lifecycle::{DesktopApp, ShellLifecycle},
    app_types::ShellState,
    append_desktop_log, append_shutdown_log, append_startup_log, logging, runtime_paths,
    DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE)
            .display()
    ));

    // Config is read once, before the builder exists; the value is
    // immutable for the rest of the process lifetime.
    let config = app_config::load_config(None, append_startup_log);

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(
            |app_handle, _args, _cwd| {
                append_desktop_log("second launch detected, focusing existing main window");
                if let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
                    let _ = window.show();
                    let _ = window.set_focus();
                }
            },
        ))
        .manage(ShellState::new(DesktopApp::<tauri::Wry>::new(config)))
        .invoke_handler(tauri::generate_handler![
            crate::bridge_commands::greet,
            crate::bridge_commands::loaded_config
        ])
        .setup(|app| {
            let app_handle = app.handle().clone();
            let state = app_handle.state::<ShellState<tauri::Wry>>();
            let _ = state.with_app("setup", |shell| shell.on_startup(app_handle.clone()));
            Ok(())
        })
        .on_page_load(|webview, payload| {
            if webview.window().label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let PageLoadEvent::Finished = payload.event() {
                let state = webview.app_handle().state::<ShellState<tauri::Wry>>();
                let _ = state.with_app("page_load", |shell| shell.on_dom_ready());
            }
        })
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::CloseRequested { api, .. } = event {
                let state = window.app_handle().state::<ShellState<tauri::Wry>>();
                let keep_open = state
                    .with_app("close_requested", |shell| shell.on_before_close())
                    .unwrap_or(false);
                if keep_open {
                    append_desktop_log("close request vetoed by before-close hook");
                    api.prevent_close();
                }
            }
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            if let RunEvent::Exit = event {
                let state = app_handle.state::<ShellState<tauri::Wry>>();
                let _ = state.with_app("exit", |shell| shell.on_shutdown());
                append_shutdown_log("desktop process exiting");
            }
        });
}
