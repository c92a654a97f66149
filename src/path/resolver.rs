use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Resolves user-typed path expressions against a base directory.
///
/// `~` and `~/...` expand to the home directory, relative expressions are
/// joined onto the base, absolute ones replace it. The result is always
/// normalized lexically, so `..` is handled without touching the disk.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    base: &'a Path,
    home: &'a Path,
}

impl<'a> PathResolver<'a> {
    pub fn new(base: &'a Path, home: &'a Path) -> Self {
        Self { base, home }
    }

    pub fn resolve(&self, expr: &str) -> PathBuf {
        let joined = if expr == "~" {
            self.home.to_path_buf()
        } else if let Some(rest) = expr.strip_prefix("~/") {
            self.home.join(rest)
        } else {
            // Path::join replaces the base when `expr` is absolute.
            self.base.join(expr)
        };
        normalize(&joined)
    }
}

/// Drops `.` and folds `..` into its parent. `..` never climbs above the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

pub fn basename(path: &Path) -> Option<&OsStr> {
    path.file_name()
}

/// True when `name` is a single, plain path component (no separators, no `.`/`..`).
pub fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == OsStr::new(name)
    )
}
