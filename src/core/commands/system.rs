use super::{Command, CommandError, Context, Outcome};
use crate::fs::host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsQuery {
    Eol,
    Cpus,
    HomeDir,
    Username,
    Architecture,
}

impl OsQuery {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--EOL" => Some(OsQuery::Eol),
            "--cpus" => Some(OsQuery::Cpus),
            "--homedir" => Some(OsQuery::HomeDir),
            "--username" => Some(OsQuery::Username),
            "--architecture" => Some(OsQuery::Architecture),
            _ => None,
        }
    }
}

/// Host information queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsCommand;

impl Command for OsCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let query = OsQuery::from_flag(&args[0])
            .ok_or_else(|| CommandError::InvalidArguments(format!("unknown os flag `{}`", args[0])))?;

        match query {
            OsQuery::Eol => writeln!(ctx.out, "{:?}", host::LINE_ENDING)?,
            OsQuery::Cpus => {
                let cpus = host::cpus();
                writeln!(ctx.out, "Overall amount of CPUs: {}", cpus.len())?;
                for cpu in &cpus {
                    match &cpu.model {
                        Some(model) => writeln!(ctx.out, "  {}: {model}", cpu.index)?,
                        None => writeln!(ctx.out, "  {}", cpu.index)?,
                    }
                }
            }
            OsQuery::HomeDir => writeln!(ctx.out, "{}", ctx.session.home_dir().display())?,
            OsQuery::Username => {
                let name = require_login_name(host::login_name())?;
                writeln!(ctx.out, "{name}")?
            }
            OsQuery::Architecture => writeln!(ctx.out, "{}", host::architecture())?,
        }
        Ok(Outcome::Continue)
    }
}

fn require_login_name(name: Option<String>) -> Result<String, CommandError> {
    name.ok_or(CommandError::Unavailable("login name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::ErrorKind;
    use crate::core::config::Options;
    use crate::core::session::Session;

    fn run(flag: &str) -> (Result<Outcome, CommandError>, String) {
        let mut session = Session::new("u", "/home/u");
        let options = Options::default();
        let mut out = Vec::new();
        let result = {
            let mut ctx = Context {
                session: &mut session,
                options: &options,
                out: &mut out,
            };
            OsCommand.execute(&mut ctx, &[flag.to_string()])
        };
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_eol() {
        let (result, out) = run("--EOL");
        assert!(result.is_ok());
        assert_eq!(out.trim_end(), format!("{:?}", host::LINE_ENDING));
    }

    #[test]
    fn test_homedir_is_session_home() {
        let (result, out) = run("--homedir");
        assert!(result.is_ok());
        assert_eq!(out, "/home/u\n");
    }

    #[test]
    fn test_cpus_lists_count() {
        let (result, out) = run("--cpus");
        assert!(result.is_ok());
        assert!(out.starts_with("Overall amount of CPUs: "));
        assert_eq!(out.lines().count(), host::cpus().len() + 1);
    }

    #[test]
    fn test_architecture() {
        let (result, out) = run("--architecture");
        assert!(result.is_ok());
        assert_eq!(out.trim_end(), std::env::consts::ARCH);
    }

    #[test]
    fn test_missing_login_name_is_not_found() {
        let err = require_login_name(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(require_login_name(Some("ann".to_string())).unwrap(), "ann");
    }

    #[test]
    fn test_unknown_flag() {
        let (result, out) = run("--kernel");
        assert_eq!(result.unwrap_err().kind(), ErrorKind::BadSyntax);
        assert!(out.is_empty());
    }
}
