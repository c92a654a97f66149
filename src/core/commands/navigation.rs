use super::preconditions::require_directory;
use super::{Command, CommandError, Context, IoResultExt, Outcome};
use crate::fs::{list_directory, render_table};

/// Moves to the parent directory, stopping at home and at the filesystem root.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpCommand;

impl Command for UpCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        if ctx.session.is_at_home() {
            return Ok(Outcome::Continue);
        }
        let Some(parent) = ctx.session.current_dir().parent().map(|p| p.to_path_buf()) else {
            return Ok(Outcome::Continue);
        };
        require_directory(&parent)?;
        ctx.session.set_current_dir(parent);
        Ok(Outcome::Continue)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let target = ctx.session.resolve(&args[0]);
        require_directory(&target)?;
        ctx.session.set_current_dir(target);
        Ok(Outcome::Continue)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        let dir = ctx.session.current_dir();
        let entries = list_directory(dir).at(dir)?;
        render_table(&entries, ctx.out)?;
        Ok(Outcome::Continue)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _ctx: &mut Context<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::ErrorKind;
    use crate::core::config::Options;
    use crate::core::session::Session;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn exec(cmd: &dyn Command, session: &mut Session, args: &[&str]) -> Result<Outcome, CommandError> {
        let options = Options::default();
        let mut out = Vec::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut ctx = Context {
            session,
            options: &options,
            out: &mut out,
        };
        cmd.execute(&mut ctx, &args)
    }

    #[test]
    fn test_up_at_home_is_noop() {
        let mut session = Session::new("u", "/");
        assert!(exec(&UpCommand, &mut session, &[]).is_ok());
        assert_eq!(session.current_dir(), Path::new("/"));
    }

    #[test]
    fn test_up_moves_one_level() -> Result<(), CommandError> {
        let home = tempfile::tempdir()?;
        let nested = home.path().join("a").join("b");
        fs::create_dir_all(&nested)?;
        let mut session = Session::new("u", home.path());
        session.set_current_dir(nested);

        exec(&UpCommand, &mut session, &[])?;
        assert_eq!(session.current_dir(), home.path().join("a"));
        exec(&UpCommand, &mut session, &[])?;
        assert!(session.is_at_home());
        exec(&UpCommand, &mut session, &[])?;
        assert!(session.is_at_home());
        Ok(())
    }

    #[test]
    fn test_cd_relative_and_absolute() -> Result<(), CommandError> {
        let home = tempfile::tempdir()?;
        fs::create_dir(home.path().join("docs"))?;
        let mut session = Session::new("u", home.path());

        exec(&CdCommand, &mut session, &["docs"])?;
        assert_eq!(session.current_dir(), home.path().join("docs"));

        let absolute = home.path().to_string_lossy().into_owned();
        exec(&CdCommand, &mut session, &[absolute.as_str()])?;
        assert!(session.is_at_home());
        Ok(())
    }

    #[test]
    fn test_cd_failures_keep_directory() -> Result<(), CommandError> {
        let home = tempfile::tempdir()?;
        fs::write(home.path().join("file.txt"), "x")?;
        let mut session = Session::new("u", home.path());

        let err = exec(&CdCommand, &mut session, &["missing"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = exec(&CdCommand, &mut session, &["file.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotADirectory);
        assert_eq!(session.current_dir(), PathBuf::from(home.path()));
        Ok(())
    }

    #[test]
    fn test_ls_missing_current_dir_fails() {
        let mut session = Session::new("u", "/path/that/does/not/exist");
        let err = exec(&LsCommand, &mut session, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_exit_returns_exit_outcome() {
        let mut session = Session::new("u", "/");
        assert_eq!(exec(&ExitCommand, &mut session, &[]).unwrap(), Outcome::Exit);
    }
}
