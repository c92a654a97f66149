use std::path::{Path, PathBuf};

use crate::path::PathResolver;

/// Per-user interpreter state.
///
/// `set_current_dir` does no validation; callers check that the target is
/// an existing directory first.
#[derive(Debug, Clone)]
pub struct Session {
    username: String,
    home_dir: PathBuf,
    current_dir: PathBuf,
}

impl Session {
    /// Starts a session in the user's home directory.
    pub fn new(username: impl Into<String>, home_dir: impl Into<PathBuf>) -> Self {
        let home_dir = home_dir.into();
        Self {
            username: username.into(),
            current_dir: home_dir.clone(),
            home_dir,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    pub fn is_at_home(&self) -> bool {
        self.current_dir == self.home_dir
    }

    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.current_dir, &self.home_dir)
    }

    pub fn resolve(&self, expr: &str) -> PathBuf {
        self.resolver().resolve(expr)
    }
}
