use tauri::{AppHandle, Runtime};

use crate::{append_desktop_log, append_shutdown_log, append_startup_log, AppConfig};

/// Bridge smoke-test message. The webview invokes `greet` to confirm the
/// invoke path into the shell process works end to end.
pub(crate) fn greeting(name: &str) -> String {
    format!("Hello {name}, It's show time!")
}

/// Hook points the host runtime drives at fixed moments of the process
/// lifetime. The shell owns when these fire; implementations own what
/// happens inside them.
pub(crate) trait ShellLifecycle<R: Runtime> {
    /// Runs once the host runtime is up, before the webview has content.
    fn on_startup(&mut self, app_handle: AppHandle<R>);

    /// Runs when the main window has finished loading its content.
    fn on_dom_ready(&mut self);

    /// Runs when the user asks to close the main window. Returning true
    /// keeps the window open.
    fn on_before_close(&mut self) -> bool {
        false
    }

    /// Runs as the process exits.
    fn on_shutdown(&mut self);
}

pub(crate) struct DesktopApp<R: Runtime> {
    pub(crate) config: AppConfig,
    pub(crate) app_handle: Option<AppHandle<R>>,
}

impl<R: Runtime> DesktopApp<R> {
    pub(crate) fn new(config: AppConfig) -> Self {
        Self {
            config,
            app_handle: None,
        }
    }

    pub(crate) fn greet(&self, name: &str) -> String {
        greeting(name)
    }
}

impl<R: Runtime> ShellLifecycle<R> for DesktopApp<R> {
    fn on_startup(&mut self, app_handle: AppHandle<R>) {
        self.app_handle = Some(app_handle);
        append_startup_log("startup hook ran, runtime handle stored");
    }

    fn on_dom_ready(&mut self) {
        match &self.app_handle {
            Some(app_handle) => {
                let package_info = app_handle.package_info();
                append_desktop_log(&format!(
                    "main window content is ready ({} {})",
                    package_info.name, package_info.version
                ));
            }
            None => append_desktop_log("main window content is ready"),
        }
    }

    fn on_shutdown(&mut self) {
        self.app_handle = None;
        append_shutdown_log("shutdown hook ran, runtime handle released");
    }
}
