use std::{
    fmt,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::runtime_paths;

/// Shell configuration read from the JSON config file. Unknown fields are
/// ignored so older shells keep working against newer files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) config_data: String,
}

#[derive(Debug)]
pub(crate) enum ConfigLoadError {
    FileUnavailable(std::io::Error),
    DecodeFailure(serde_json::Error),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::FileUnavailable(error) => {
                write!(f, "config file unavailable: {error}")
            }
            ConfigLoadError::DecodeFailure(error) => {
                write!(f, "config file is not valid JSON: {error}")
            }
        }
    }
}

/// Outcome of a load attempt. `config` is always usable; `fallback_cause`
/// records why defaults were substituted, if they were.
#[derive(Debug)]
pub(crate) struct ConfigLoadReport {
    pub(crate) config: AppConfig,
    pub(crate) path: PathBuf,
    pub(crate) fallback_cause: Option<ConfigLoadError>,
}

/// Best-effort load. A missing or corrupt config file must never prevent
/// the shell from starting, so both failure kinds are absorbed here and
/// reported through the injected log sink only.
pub(crate) fn load_config<F>(explicit_path: Option<&Path>, log: F) -> AppConfig
where
    F: Fn(&str),
{
    let report = load_config_report(explicit_path);
    if let Some(cause) = &report.fallback_cause {
        log(&format!(
            "config {} unusable, continuing with defaults: {}",
            report.path.display(),
            cause
        ));
    }
    report.config
}

pub(crate) fn load_config_report(explicit_path: Option<&Path>) -> ConfigLoadReport {
    let path = runtime_paths::resolve_config_path(explicit_path);
    match read_config_file(&path) {
        Ok(config) => ConfigLoadReport {
            config,
            path,
            fallback_cause: None,
        },
        Err(cause) => ConfigLoadReport {
            config: AppConfig::default(),
            path,
            fallback_cause: Some(cause),
        },
    }
}

fn read_config_file(path: &Path) -> Result<AppConfig, ConfigLoadError> {
    let file = File::open(path).map_err(ConfigLoadError::FileUnavailable)?;
    serde_json::from_reader(BufReader::new(file)).map_err(ConfigLoadError::DecodeFailure)
}
