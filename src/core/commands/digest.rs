use super::preconditions::require_file;
use super::{Command, CommandError, Context, IoResultExt, Outcome};
use crate::fs::sha256_file;

/// Prints the SHA-256 digest of a file as lowercase hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashCommand;

impl Command for HashCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let path = ctx.session.resolve(&args[0]);
        require_file(&path)?;
        let digest = sha256_file(&path).at(&path)?;
        writeln!(ctx.out, "{digest}")?;
        Ok(Outcome::Continue)
    }
}
