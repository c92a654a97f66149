use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-V".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        Flags { flags }
    }

    /// Marks every recognized switch in `args`. Anything else is left for
    /// the identity resolver. A switch given a value is rejected.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let name = arg.split_once('=').map_or(arg.as_str(), |(name, _)| name);
            let Some(flag) = self
                .flags
                .values_mut()
                .find(|flag| name == flag.short || name == flag.long)
            else {
                continue;
            };
            if name.len() != arg.len() {
                return Err(ShellError::FlagError(format!("Flag {name} takes no value")));
            }
            flag.value = Some("true".to_string());
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn print_help(&self) {
        println!("Usage: fman --username=<name>");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
        println!("\nEnvironment:");
        println!("  FMAN_CONFIG      rc file location (default ~/.fmanrc)");
        println!("  FMAN_LOG         log filter written to stderr (default warn)");
    }
}
