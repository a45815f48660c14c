use std::sync::Mutex;

use tauri::Runtime;

use crate::{app_lifecycle::DesktopApp, append_desktop_log};

/// Managed wrapper around the lifecycle object. The host runtime hands out
/// shared references, so hook transits go through the mutex.
pub(crate) struct ShellState<R: Runtime> {
    app: Mutex<DesktopApp<R>>,
}

impl<R: Runtime> ShellState<R> {
    pub(crate) fn new(app: DesktopApp<R>) -> Self {
        Self {
            app: Mutex::new(app),
        }
    }

    /// Runs `operation` against the lifecycle object. A poisoned lock is
    /// logged and reported as `None` rather than propagated.
    pub(crate) fn with_app<T>(
        &self,
        context: &str,
        operation: impl FnOnce(&mut DesktopApp<R>) -> T,
    ) -> Option<T> {
        match self.app.lock() {
            Ok(mut guard) => Some(operation(&mut guard)),
            Err(_) => {
                append_desktop_log(&format!("shell state lock poisoned in {context}"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tauri::test::MockRuntime;

    use super::ShellState;
    use crate::{app_lifecycle::DesktopApp, AppConfig};

    fn mock_state() -> ShellState<MockRuntime> {
        ShellState::new(DesktopApp::new(AppConfig {
            config_data: "managed".to_string(),
        }))
    }

    #[test]
    fn with_app_exposes_the_lifecycle_object() {
        let state = mock_state();
        let value = state.with_app("test", |app| app.config.config_data.clone());
        assert_eq!(value.as_deref(), Some("managed"));
    }

    #[test]
    fn with_app_applies_mutations() {
        let state = mock_state();
        state.with_app("test", |app| {
            app.config.config_data.push_str("-updated");
        });
        let value = state.with_app("test", |app| app.config.config_data.clone());
        assert_eq!(value.as_deref(), Some("managed-updated"));
    }
}
