use thiserror::Error;

use crate::core::config::ConfigError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Home directory not found")]
    HomeDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Flag error: {0}")]
    FlagError(String),
    #[error("Ctrl-C error: {0}")]
    CtrlC(String),
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}
