use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default, Clone)]
pub struct AliasManager {
    aliases: HashMap<Box<str>, Box<str>>,
}

impl AliasManager {
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    pub fn add(&mut self, name: &str, command: &str) {
        self.aliases.insert(name.into(), command.into());
    }

    pub fn get<'a>(&'a self, cmd: &str) -> Option<Cow<'a, str>> {
        self.aliases.get(cmd).map(|s| Cow::Borrowed(&**s))
    }

    /// Replaces the leading token when it names an alias. Expansion happens
    /// once; an alias body starting with another alias is not expanded again.
    pub fn expand_command<'a>(&'a self, command: &'a str) -> Cow<'a, str> {
        let trimmed = command.trim_start();
        let (head, rest) = match trimmed.find(char::is_whitespace) {
            Some(idx) => trimmed.split_at(idx),
            None => (trimmed, ""),
        };
        match self.get(head) {
            Some(body) => Cow::Owned(format!("{body}{rest}")),
            None => Cow::Borrowed(command),
        }
    }

    pub fn get_all(&self) -> BTreeMap<Cow<'_, str>, Cow<'_, str>> {
        self.aliases
            .iter()
            .map(|(k, v)| (Cow::Borrowed(&**k), Cow::Borrowed(&**v)))
            .collect()
    }
}
