use std::{borrow::Cow, collections::BTreeMap};

use rustyline::completion::Pair;

use crate::core::commands::Verb;

const OS_FLAGS: [&str; 5] = ["--EOL", "--cpus", "--homedir", "--username", "--architecture"];

#[derive(Clone, Default)]
pub struct CommandCompleter {
    aliases: BTreeMap<Cow<'static, str>, Cow<'static, str>>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    pub fn update_aliases(&mut self, aliases: BTreeMap<Cow<'_, str>, Cow<'_, str>>) {
        self.aliases = aliases
            .into_iter()
            .map(|(k, v)| (Cow::Owned(k.into_owned()), Cow::Owned(v.into_owned())))
            .collect();
    }

    pub fn complete_command(&self, line: &str) -> Vec<Pair> {
        let mut matches = Vec::new();
        let input = line.trim();

        self.add_verb_matches(&mut matches, input);
        self.add_alias_matches(&mut matches, input);

        matches
    }

    pub fn complete_os_flag(&self, word: &str) -> Vec<Pair> {
        OS_FLAGS
            .iter()
            .filter(|flag| flag.starts_with(word))
            .map(|flag| Pair {
                display: flag.to_string(),
                replacement: flag.to_string(),
            })
            .collect()
    }

    fn add_verb_matches(&self, matches: &mut Vec<Pair>, input: &str) {
        for verb in Verb::ALL {
            if verb.as_str().starts_with(input) {
                matches.push(Pair {
                    display: verb.as_str().to_string(),
                    replacement: verb.as_str().to_string(),
                });
            }
        }
    }

    fn add_alias_matches(&self, matches: &mut Vec<Pair>, input: &str) {
        for (alias, body) in &self.aliases {
            if alias.starts_with(input) {
                matches.push(Pair {
                    display: format!("{alias} (alias for {body})"),
                    replacement: alias.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|p| p.replacement).collect()
    }

    #[test]
    fn test_verb_prefix() {
        let completer = CommandCompleter::new();
        assert_eq!(replacements(completer.complete_command("c")), vec!["cd", "cat", "cp", "compress"]);
        assert_eq!(replacements(completer.complete_command(".")), vec![".exit"]);
    }

    #[test]
    fn test_alias_matches() {
        let mut completer = CommandCompleter::new();
        let mut aliases = BTreeMap::new();
        aliases.insert(Cow::Borrowed("home"), Cow::Borrowed("cd ~"));
        completer.update_aliases(aliases);

        let pairs = completer.complete_command("ho");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "home");
        assert!(pairs[0].display.contains("cd ~"));
    }

    #[test]
    fn test_os_flags() {
        let completer = CommandCompleter::new();
        assert_eq!(replacements(completer.complete_os_flag("--h")), vec!["--homedir"]);
        assert_eq!(completer.complete_os_flag("").len(), 5);
    }
}
