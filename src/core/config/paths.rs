use super::ConfigError;
use std::env;
use std::path::{Path, PathBuf};

/// Overrides the rc file location when set.
pub const CONFIG_ENV: &str = "FMAN_CONFIG";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    pub history_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        let mut paths = Self::in_home(&home);
        if let Some(custom) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            paths.rc_path = PathBuf::from(custom);
        }
        Ok(paths)
    }

    pub fn in_home(home: &Path) -> Self {
        ConfigPaths {
            rc_path: home.join(".fmanrc"),
            history_path: home.join(".fman_history"),
        }
    }
}
