use std::fs;
use std::io;
use std::path::Path;

use super::{CommandError, IoResultExt};

/// Existing, listable directory.
pub fn require_directory(path: &Path) -> Result<(), CommandError> {
    let metadata = metadata_or_not_found(fs::metadata(path), path)?;
    if !metadata.is_dir() {
        return Err(CommandError::NotADirectory(path.to_path_buf()));
    }
    fs::read_dir(path).at(path)?;
    Ok(())
}

/// Existing regular file (symlinks are followed).
pub fn require_file(path: &Path) -> Result<(), CommandError> {
    let metadata = metadata_or_not_found(fs::metadata(path), path)?;
    if !metadata.is_file() {
        return Err(CommandError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Something exists at `path`; a dangling symlink counts.
pub fn require_exists(path: &Path) -> Result<fs::Metadata, CommandError> {
    metadata_or_not_found(fs::symlink_metadata(path), path)
}

/// Nothing exists at `path`, not even a dangling symlink.
pub fn require_absent(path: &Path) -> Result<(), CommandError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Err(CommandError::AlreadyExists(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CommandError::io(path, e)),
    }
}

fn metadata_or_not_found(result: io::Result<fs::Metadata>, path: &Path) -> Result<fs::Metadata, CommandError> {
    result.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CommandError::NotFound(path.to_path_buf()),
        _ => CommandError::io(path, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::ErrorKind;

    #[test]
    fn test_directory_checks() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("f");
        fs::write(&file, "x")?;

        assert!(require_directory(dir.path()).is_ok());
        assert_eq!(require_directory(&file).unwrap_err().kind(), ErrorKind::NotADirectory);
        assert_eq!(
            require_directory(&dir.path().join("nope")).unwrap_err().kind(),
            ErrorKind::NotFound
        );
        Ok(())
    }

    #[test]
    fn test_file_checks() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("f");
        fs::write(&file, "x")?;

        assert!(require_file(&file).is_ok());
        assert_eq!(require_file(dir.path()).unwrap_err().kind(), ErrorKind::NotAFile);
        assert!(require_exists(&file).is_ok());
        assert_eq!(require_absent(&file).unwrap_err().kind(), ErrorKind::AlreadyExists);
        assert!(require_absent(&dir.path().join("g")).is_ok());
        Ok(())
    }
}
