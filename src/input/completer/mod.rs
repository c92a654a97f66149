use std::{borrow::Cow, collections::BTreeMap, path::PathBuf};

mod command;
mod path;

use command::CommandCompleter;
use path::PathCompleter;

use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Line-editor helper: verb/alias completion on the first word, `os` flag
/// completion, path completion elsewhere, and verb highlighting.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(current_dir: PathBuf, home_dir: PathBuf, highlighter: SyntaxHighlighter) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(),
            path_completer: PathCompleter::new(current_dir, home_dir),
            highlighter,
        }
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.path_completer.set_base(dir);
    }

    pub fn update_aliases(&mut self, aliases: BTreeMap<Cow<'_, str>, Cow<'_, str>>) {
        self.command_completer.update_aliases(aliases);
    }

    fn candidates(&self, line_up_to_cursor: &str, pos: usize) -> (usize, Vec<Pair>) {
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();
        if line_up_to_cursor.is_empty() || line_up_to_cursor.ends_with(char::is_whitespace) {
            words.push("");
        }

        let last_word = words.last().copied().unwrap_or("");
        let start = pos - last_word.len();
        let matches = match words.len() {
            0 | 1 => self.command_completer.complete_command(last_word),
            2 if words[0] == "os" => self.command_completer.complete_os_flag(last_word),
            _ => self.path_completer.complete_path(last_word),
        };
        (start, matches)
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos], pos))
    }
}
