use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::preconditions::{require_absent, require_directory, require_exists, require_file};
use super::{Command, CommandError, Context, IoResultExt, Outcome};
use crate::fs::{copy_file, create_new, stream_file};
use crate::path::{basename, is_plain_name};

#[derive(Debug, Clone, Copy, Default)]
pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let path = ctx.session.resolve(&args[0]);
        require_file(&path)?;
        let (copied, ends_with_newline) = stream_file(&path, ctx.out).at(&path)?;
        if copied > 0 && !ends_with_newline {
            writeln!(ctx.out)?;
        }
        Ok(Outcome::Continue)
    }
}

/// Creates an empty file. Never overwrites.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddCommand;

impl Command for AddCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let path = ctx.session.resolve(&args[0]);
        if basename(&path).is_none() {
            return Err(CommandError::InvalidArguments(format!("`{}` is not a file name", args[0])));
        }
        create_new(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => CommandError::AlreadyExists(path.clone()),
            _ => CommandError::io(&path, e),
        })?;
        Ok(Outcome::Continue)
    }
}

/// `rn <path> <newName>`: renames a file within its directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameCommand;

impl Command for RenameCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let source = ctx.session.resolve(&args[0]);
        let new_name = &args[1];
        if !is_plain_name(new_name) {
            return Err(CommandError::InvalidArguments(format!(
                "`{new_name}` must be a plain file name"
            )));
        }
        let parent = source
            .parent()
            .ok_or_else(|| CommandError::InvalidArguments("cannot rename the root".to_string()))?;
        let destination = parent.join(new_name);

        require_file(&source)?;
        require_absent(&destination)?;
        fs::rename(&source, &destination).at(&source)?;
        Ok(Outcome::Continue)
    }
}

/// Resolves `<path> <destDir>` into a source file and a not-yet-existing target.
fn transfer_paths(ctx: &Context<'_>, args: &[String]) -> Result<(PathBuf, PathBuf), CommandError> {
    let source = ctx.session.resolve(&args[0]);
    let dest_dir = ctx.session.resolve(&args[1]);
    require_file(&source)?;
    require_directory(&dest_dir)?;

    let name = basename(&source).ok_or_else(|| CommandError::NotAFile(source.clone()))?;
    let destination = dest_dir.join(name);
    require_absent(&destination)?;
    Ok((source, destination))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CopyCommand;

impl Command for CopyCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let (source, destination) = transfer_paths(ctx, args)?;
        let bytes = copy_file(&source, &destination).at(&destination)?;
        tracing::debug!(from = %source.display(), to = %destination.display(), bytes, "copied");
        Ok(Outcome::Continue)
    }
}

/// Copy, then remove the source. If the source cannot be removed the copy is
/// deleted again, so a failed move leaves exactly one file behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveCommand;

impl Command for MoveCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let (source, destination) = transfer_paths(ctx, args)?;
        move_file(&source, &destination, |path| fs::remove_file(path))?;
        Ok(Outcome::Continue)
    }
}

fn move_file<F>(source: &Path, destination: &Path, remove_source: F) -> Result<(), CommandError>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    copy_file(source, destination).at(destination)?;
    if let Err(err) = remove_source(source) {
        roll_back(destination);
        return Err(CommandError::io(source, err));
    }
    Ok(())
}

fn roll_back(copy: &Path) {
    if let Err(err) = fs::remove_file(copy) {
        tracing::warn!(path = %copy.display(), %err, "move rollback failed, file is duplicated");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let path = ctx.session.resolve(&args[0]);
        let metadata = require_exists(&path)?;
        if metadata.is_dir() {
            return Err(CommandError::NotAFile(path));
        }
        fs::remove_file(&path).at(&path)?;
        Ok(Outcome::Continue)
    }
}
