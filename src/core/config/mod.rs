use std::{borrow::Cow, collections::BTreeMap};

use thiserror::Error;

mod aliases;
mod loader;
mod options;
mod paths;

use aliases::AliasManager;
use loader::ConfigLoader;
pub use options::{ColorMode, Options};
pub use paths::{ConfigPaths, CONFIG_ENV};

/// Aliases and options read from the rc file.
#[derive(Debug, Clone)]
pub struct Config {
    paths: ConfigPaths,
    aliases: AliasManager,
    options: Options,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::with_paths(ConfigPaths::new()?))
    }

    pub fn with_paths(paths: ConfigPaths) -> Self {
        Config {
            paths,
            aliases: AliasManager::new(),
            options: Options::default(),
        }
    }

    /// Reads the rc file. On error the config is left at its defaults.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let rc_path = self.paths.rc_path.clone();
        let mut staged = Self::with_paths(self.paths.clone());
        ConfigLoader::new(&rc_path).load_into(&mut staged)?;
        *self = staged;
        Ok(())
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn get_alias<'a>(&'a self, cmd: &str) -> Option<Cow<'a, str>> {
        self.aliases.get(cmd)
    }

    pub fn expand_aliases<'a>(&'a self, command: &'a str) -> Cow<'a, str> {
        self.aliases.expand_command(command)
    }

    pub fn aliases(&self) -> BTreeMap<Cow<'_, str>, Cow<'_, str>> {
        self.aliases.get_all()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Home directory not found")]
    HomeDirNotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unrecognized line: {0}")]
    InvalidLine(String),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("invalid value `{value}` for option `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("alias `{0}` would shadow a built-in command")]
    ReservedAlias(String),
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ConfigError>,
    },
}
