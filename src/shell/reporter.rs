use std::io::{self, Write};
use std::path::Path;

use crate::core::commands::{CommandError, Outcome};
use crate::highlight::SyntaxHighlighter;

pub const FAILURE_BANNER: &str = "Operation failed";

/// The user-facing status lines. Failures never carry detail here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    highlighter: SyntaxHighlighter,
}

impl Reporter {
    pub fn new(highlighter: SyntaxHighlighter) -> Self {
        Self { highlighter }
    }

    pub fn welcome(&self, out: &mut dyn Write, username: &str) -> io::Result<()> {
        writeln!(out, "Welcome to the File Manager, {username}!")
    }

    pub fn goodbye(&self, out: &mut dyn Write, username: &str) -> io::Result<()> {
        writeln!(out, "Thank you for using File Manager, {username}, goodbye!")
    }

    pub fn current_dir(&self, out: &mut dyn Write, dir: &Path) -> io::Result<()> {
        writeln!(out, "You are currently in {}", dir.display())
    }

    pub fn failure(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.highlighter.highlight_error(FAILURE_BANNER))
    }

    /// Failure banner when `result` is an error, then the directory banner.
    /// Nothing is printed for [`Outcome::Exit`].
    pub fn report(
        &self,
        out: &mut dyn Write,
        result: &Result<Outcome, CommandError>,
        dir: &Path,
    ) -> io::Result<()> {
        match result {
            Ok(Outcome::Exit) => return Ok(()),
            Ok(Outcome::Continue) => {}
            Err(_) => self.failure(out)?,
        }
        self.current_dir(out, dir)
    }
}
