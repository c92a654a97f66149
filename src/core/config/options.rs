use std::str::FromStr;

use super::ConfigError;
use crate::fs::CompressionParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" => Ok(ColorMode::Always),
            "never" | "off" => Ok(ColorMode::Never),
            _ => Err(()),
        }
    }
}

/// Settings changeable with `set <key>=<value>` in the rc file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub color: ColorMode,
    pub history: bool,
    pub history_size: usize,
    /// Mirror the session's directory into the process working directory.
    pub sync_process_dir: bool,
    pub compression: CompressionParams,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            history: true,
            history_size: 1000,
            sync_process_dir: true,
            compression: CompressionParams::default(),
        }
    }
}

impl Options {
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "color" => self.color = value.parse().map_err(|_| invalid())?,
            "history" => self.history = parse_bool(value).ok_or_else(invalid)?,
            "history_size" => self.history_size = value.parse().map_err(|_| invalid())?,
            "sync_process_dir" => self.sync_process_dir = parse_bool(value).ok_or_else(invalid)?,
            "compression_quality" => {
                self.compression.quality = parse_in_range(value, 0, 11).ok_or_else(invalid)?
            }
            "compression_window" => {
                self.compression.window = parse_in_range(value, 10, 24).ok_or_else(invalid)?
            }
            _ => return Err(ConfigError::UnknownOption(key.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn parse_in_range(value: &str, min: u32, max: u32) -> Option<u32> {
    value.parse().ok().filter(|v| (min..=max).contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.color, ColorMode::Auto);
        assert!(options.history);
        assert!(options.sync_process_dir);
        assert_eq!(options.compression.quality, 11);
    }

    #[test]
    fn test_set_values() -> Result<(), ConfigError> {
        let mut options = Options::default();
        options.set("color", "never")?;
        options.set("history", "off")?;
        options.set("history_size", "50")?;
        options.set("sync_process_dir", "false")?;
        options.set("compression_quality", "4")?;
        options.set("compression_window", "18")?;

        assert_eq!(options.color, ColorMode::Never);
        assert!(!options.history);
        assert_eq!(options.history_size, 50);
        assert!(!options.sync_process_dir);
        assert_eq!(options.compression, CompressionParams { quality: 4, window: 18 });
        Ok(())
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut options = Options::default();
        assert!(matches!(
            options.set("compression_quality", "12"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            options.set("history", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            options.set("colour", "auto"),
            Err(ConfigError::UnknownOption(_))
        ));
        assert_eq!(options, Options::default());
    }
}
