use std::path::{Path, PathBuf};

use super::preconditions::{require_absent, require_directory, require_file};
use super::{Command, CommandError, Context, IoResultExt, Outcome};
use crate::fs::{compress_file, decompress_file, COMPRESSED_EXTENSION};
use crate::path::basename;

/// `compress <path> <destDir>` writes `<destDir>/<basename>.br`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressCommand;

impl Command for CompressCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let (source, dest_dir) = codec_paths(ctx, args)?;
        let name = basename(&source).ok_or_else(|| CommandError::NotAFile(source.clone()))?;

        let mut packed_name = name.to_os_string();
        packed_name.push(".");
        packed_name.push(COMPRESSED_EXTENSION);
        let destination = dest_dir.join(packed_name);
        require_absent(&destination)?;

        let written = compress_file(&source, &destination, ctx.options.compression).at(&destination)?;
        tracing::debug!(path = %destination.display(), bytes = written, "compressed");
        Ok(Outcome::Continue)
    }
}

/// `decompress <path> <destDir>` strips the `.br` suffix for the output name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecompressCommand;

impl Command for DecompressCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let (source, dest_dir) = codec_paths(ctx, args)?;
        let name = unpacked_name(&source).ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "`{}` does not end in .{COMPRESSED_EXTENSION}",
                source.display()
            ))
        })?;
        let destination = dest_dir.join(name);
        require_absent(&destination)?;

        decompress_file(&source, &destination).at(&source)?;
        Ok(Outcome::Continue)
    }
}

fn codec_paths(ctx: &Context<'_>, args: &[String]) -> Result<(PathBuf, PathBuf), CommandError> {
    let source = ctx.session.resolve(&args[0]);
    let dest_dir = ctx.session.resolve(&args[1]);
    require_file(&source)?;
    require_directory(&dest_dir)?;
    Ok((source, dest_dir))
}

/// `notes.txt.br` -> `notes.txt`. A bare `.br` has no name left and is rejected.
fn unpacked_name(path: &Path) -> Option<String> {
    let name = basename(path)?.to_str()?;
    let stem = name.strip_suffix(COMPRESSED_EXTENSION)?.strip_suffix('.')?;
    (!stem.is_empty()).then(|| stem.to_string())
}
