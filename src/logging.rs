use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::{runtime_paths, DESKTOP_LOG_FILE};

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => PathBuf::from("logs").join(file_name),
    }
}

pub(crate) fn append_startup_log(message: &str) {
    append_log_line("startup", message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log_line("desktop", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_log_line("shutdown", message);
}

fn append_log_line(scope: &str, message: &str) {
    let line = format!(
        "[{}] [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        scope,
        message
    );

    // The shell must keep running even when the log file is unwritable.
    if let Err(error) = write_log_line(&line) {
        eprintln!("nextshell: log write failed ({error}): {line}");
    }
}

fn write_log_line(line: &str) -> Result<(), String> {
    let log_path = resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE);
    if let Some(parent_dir) = log_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|error| format!("failed to open log file {}: {}", log_path.display(), error))?;
    writeln!(log_file, "{line}")
        .map_err(|error| format!("failed to append to {}: {}", log_path.display(), error))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::resolve_desktop_log_path;

    #[test]
    fn resolve_desktop_log_path_places_log_under_root_dir() {
        let resolved = resolve_desktop_log_path(Some(PathBuf::from("/srv/shell")), "desktop.log");
        assert_eq!(resolved, PathBuf::from("/srv/shell/logs/desktop.log"));
    }

    #[test]
    fn resolve_desktop_log_path_uses_relative_logs_dir_without_root() {
        let resolved = resolve_desktop_log_path(None, "desktop.log");
        assert_eq!(resolved, PathBuf::from("logs/desktop.log"));
    }
}
