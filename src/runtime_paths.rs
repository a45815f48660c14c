use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{CONFIG_PATH_ENV, DEFAULT_CONFIG_RELATIVE_PATH, ROOT_DIR_ENV, ROOT_DIR_NAME};

/// Directory that owns shell-side state such as the desktop log.
pub(crate) fn default_root_dir() -> Option<PathBuf> {
    root_dir_from_sources(env::var(ROOT_DIR_ENV).ok().as_deref(), home::home_dir())
}

fn root_dir_from_sources(env_root: Option<&str>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(raw) = env_root {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home_dir.map(|home| home.join(ROOT_DIR_NAME))
}

/// Resolution order: explicit argument, then the environment override,
/// then the conventional relative location.
pub(crate) fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    config_path_from_sources(explicit, env::var(CONFIG_PATH_ENV).ok().as_deref())
}

fn config_path_from_sources(explicit: Option<&Path>, env_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(raw) = env_path {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    PathBuf::from(DEFAULT_CONFIG_RELATIVE_PATH)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{config_path_from_sources, root_dir_from_sources};
    use crate::DEFAULT_CONFIG_RELATIVE_PATH;

    #[test]
    fn config_path_from_sources_prefers_explicit_argument() {
        let explicit = Path::new("/tmp/custom.json");
        let resolved = config_path_from_sources(Some(explicit), Some("/elsewhere.json"));
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn config_path_from_sources_uses_env_override_when_no_argument() {
        let resolved = config_path_from_sources(None, Some("  /opt/shell/config.json  "));
        assert_eq!(resolved, PathBuf::from("/opt/shell/config.json"));
    }

    #[test]
    fn config_path_from_sources_ignores_blank_env_override() {
        let resolved = config_path_from_sources(None, Some("   "));
        assert_eq!(resolved, PathBuf::from(DEFAULT_CONFIG_RELATIVE_PATH));
    }

    #[test]
    fn config_path_from_sources_falls_back_to_default_relative_path() {
        let resolved = config_path_from_sources(None, None);
        assert_eq!(resolved, PathBuf::from(DEFAULT_CONFIG_RELATIVE_PATH));
    }

    #[test]
    fn root_dir_from_sources_prefers_env_override() {
        let resolved = root_dir_from_sources(Some("/srv/shell"), Some(PathBuf::from("/home/u")));
        assert_eq!(resolved, Some(PathBuf::from("/srv/shell")));
    }

    #[test]
    fn root_dir_from_sources_defaults_under_home() {
        let resolved = root_dir_from_sources(None, Some(PathBuf::from("/home/u")));
        assert_eq!(resolved, Some(PathBuf::from("/home/u/.nextshell")));
    }

    #[test]
    fn root_dir_from_sources_is_none_without_home() {
        assert_eq!(root_dir_from_sources(Some(" "), None), None);
    }
}
