pub(crate) const MAIN_WINDOW_LABEL: &str = "main";

pub(crate) const DEFAULT_CONFIG_RELATIVE_PATH: &str = "config/config.json";
pub(crate) const CONFIG_PATH_ENV: &str = "NEXTSHELL_CONFIG_PATH";
pub(crate) const ROOT_DIR_ENV: &str = "NEXTSHELL_ROOT";
pub(crate) const ROOT_DIR_NAME: &str = ".nextshell";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
