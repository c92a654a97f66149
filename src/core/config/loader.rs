use std::{fs, io, path::Path};

use super::{Config, ConfigError};
use crate::core::commands::Verb;

pub struct ConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Applies the rc file to `config`. A missing file is not an error.
    pub fn load_into(&self, config: &mut Config) -> Result<(), ConfigError> {
        let content = match fs::read_to_string(self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        for (idx, line) in content.lines().enumerate() {
            self.process_line(line, config)
                .map_err(|source| ConfigError::AtLine {
                    line: idx + 1,
                    source: Box::new(source),
                })?;
        }
        tracing::debug!(path = %self.path.display(), "loaded rc file");
        Ok(())
    }

    fn process_line(&self, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        match line {
            s if s.starts_with("alias ") => self.process_alias(&s["alias ".len()..], config),
            s if s.starts_with("set ") => self.process_set(&s["set ".len()..], config),
            _ => Err(ConfigError::InvalidLine(line.to_string())),
        }
    }

    fn process_alias(&self, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let (name, command) = line
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidLine(format!("alias {line}")))?;
        let name = name.trim();
        let command = strip_quotes(command.trim());

        if name.is_empty() || name.contains(char::is_whitespace) || command.is_empty() {
            return Err(ConfigError::InvalidLine(format!("alias {line}")));
        }
        if Verb::from_token(name).is_some() {
            return Err(ConfigError::ReservedAlias(name.to_string()));
        }

        config.aliases.add(name, command);
        Ok(())
    }

    fn process_set(&self, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidLine(format!("set {line}")))?;
        config.options.set(key.trim(), strip_quotes(value.trim()))
    }
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('\'') && value.ends_with('\''))
            || (value.starts_with('"') && value.ends_with('"')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ColorMode, ConfigPaths};

    fn config_with_rc(content: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".fmanrc"), content).unwrap();
        let config = Config::with_paths(ConfigPaths::in_home(dir.path()));
        (dir, config)
    }

    #[test]
    fn test_process_alias() {
        let (_dir, mut config) = config_with_rc("");
        let path = config.paths().rc_path.clone();
        let loader = ConfigLoader::new(&path);

        loader.process_alias("l='ls'", &mut config).unwrap();
        assert_eq!(config.get_alias("l").unwrap(), "ls");
    }

    #[test]
    fn test_alias_cannot_shadow_verb() {
        let (_dir, mut config) = config_with_rc("");
        let path = config.paths().rc_path.clone();
        let loader = ConfigLoader::new(&path);

        assert!(matches!(
            loader.process_alias("cd=ls", &mut config),
            Err(ConfigError::ReservedAlias(_))
        ));
    }

    #[test]
    fn test_load_full_file() -> Result<(), ConfigError> {
        let content = r#"
            # file manager settings
            alias home="cd ~"
            alias l=ls
            set color=never
            set history_size=20
        "#;
        let (_dir, mut config) = config_with_rc(content);
        config.load()?;

        assert_eq!(config.get_alias("home").unwrap(), "cd ~");
        assert_eq!(config.get_alias("l").unwrap(), "ls");
        assert_eq!(config.options().color, ColorMode::Never);
        assert_eq!(config.options().history_size, 20);
        Ok(())
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let (_dir, mut config) = config_with_rc("set color=never\nexport X=1\n");
        match config.load() {
            Err(ConfigError::AtLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_fine() -> Result<(), ConfigError> {
        let dir = tempfile::tempdir()?;
        let mut config = Config::with_paths(ConfigPaths::in_home(dir.path()));
        config.load()?;
        assert!(config.aliases().is_empty());
        Ok(())
    }
}
