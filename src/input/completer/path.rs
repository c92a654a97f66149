use std::{fs, path::PathBuf};

use rustyline::completion::Pair;

use crate::path::PathResolver;

/// Completes file names relative to the session's current directory.
#[derive(Clone)]
pub struct PathCompleter {
    base: PathBuf,
    home: PathBuf,
}

impl PathCompleter {
    pub fn new(base: PathBuf, home: PathBuf) -> Self {
        Self { base, home }
    }

    pub fn set_base(&mut self, base: PathBuf) {
        self.base = base;
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (typed_dir, file_prefix) = match incomplete.rfind('/') {
            Some(idx) => incomplete.split_at(idx + 1),
            None => ("", incomplete),
        };
        let dir_to_search = if typed_dir.is_empty() {
            self.base.clone()
        } else {
            PathResolver::new(&self.base, &self.home).resolve(typed_dir)
        };

        let mut matches = Vec::new();
        if let Ok(entries) = fs::read_dir(&dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                    continue;
                };
                // hidden entries only when asked for
                if !name.starts_with(file_prefix) || (name.starts_with('.') && !file_prefix.starts_with('.')) {
                    continue;
                }
                let is_dir = entry.path().is_dir();
                matches.push(completion_pair(typed_dir, &name, is_dir));
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

fn completion_pair(typed_dir: &str, name: &str, is_dir: bool) -> Pair {
    let full = format!("{typed_dir}{name}");
    let needs_quotes = full.contains(char::is_whitespace);

    let (display, replacement) = match (is_dir, needs_quotes) {
        (true, false) => (format!("{name}/"), format!("{full}/")),
        (true, true) => (format!("{name}/"), format!("\"{full}/\"")),
        (false, false) => (name.to_string(), format!("{full} ")),
        (false, true) => (name.to_string(), format!("\"{full}\" ")),
    };
    Pair { display, replacement }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_relative_to_base() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("docs"))?;
        fs::write(dir.path().join("draft.txt"), "")?;
        fs::write(dir.path().join(".hidden"), "")?;
        let completer = PathCompleter::new(dir.path().to_path_buf(), dir.path().to_path_buf());

        let pairs = completer.complete_path("d");
        let replacements: Vec<&str> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(replacements, vec!["docs/", "draft.txt "]);

        assert_eq!(completer.complete_path(".h").len(), 1);
        Ok(())
    }

    #[test]
    fn test_completes_inside_typed_directory() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("docs"))?;
        fs::write(dir.path().join("docs").join("my notes.txt"), "")?;
        let completer = PathCompleter::new(dir.path().to_path_buf(), dir.path().to_path_buf());

        let pairs = completer.complete_path("docs/my");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].display, "my notes.txt");
        assert_eq!(pairs[0].replacement, "\"docs/my notes.txt\" ");
        Ok(())
    }
}
