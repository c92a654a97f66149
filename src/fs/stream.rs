use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

const CHUNK_SIZE: usize = 8 * 1024;

/// Opens `path` for writing, failing with `AlreadyExists` instead of truncating.
pub fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// Streams the file at `path` into `out`. Returns the number of bytes copied
/// and whether the last byte was a newline.
pub fn stream_file(path: &Path, out: &mut dyn Write) -> io::Result<(u64, bool)> {
    let mut reader = File::open(path)?;
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    let mut ends_with_newline = false;
    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        out.write_all(&buf[..read])?;
        ends_with_newline = buf[read - 1] == b'\n';
        total += read as u64;
    }
    Ok((total, ends_with_newline))
}

/// Writes everything `reader` yields into a freshly created `dest`.
///
/// `dest` must not exist. A partially written `dest` is removed on failure.
pub fn pipe_into_new<R: Read>(reader: &mut R, dest: &Path) -> io::Result<u64> {
    let file = create_new(dest)?;
    let result = write_all_from(reader, file);
    if result.is_err() {
        if let Err(err) = fs::remove_file(dest) {
            tracing::warn!(path = %dest.display(), %err, "could not remove partial output");
        }
    }
    result
}

fn write_all_from<R: Read>(reader: &mut R, file: File) -> io::Result<u64> {
    let mut writer = BufWriter::new(file);
    let copied = io::copy(reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(copied)
}

/// Byte-for-byte copy of `src` into a new file at `dest`.
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<u64> {
    let mut reader = BufReader::new(File::open(src)?);
    pipe_into_new(&mut reader, dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_file_reports_trailing_newline() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let with = dir.path().join("with.txt");
        let without = dir.path().join("without.txt");
        fs::write(&with, "hello\n")?;
        fs::write(&without, "hello")?;

        let mut out = Vec::new();
        assert_eq!(stream_file(&with, &mut out)?, (6, true));
        assert_eq!(stream_file(&without, &mut out)?, (5, false));
        assert_eq!(out, b"hello\nhello");
        Ok(())
    }

    #[test]
    fn test_copy_file_refuses_existing_destination() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("src.bin");
        let dest = dir.path().join("dest.bin");
        fs::write(&src, [0u8, 1, 2, 255])?;
        fs::write(&dest, b"keep")?;

        let err = copy_file(&src, &dest).err().map(|e| e.kind());
        assert_eq!(err, Some(io::ErrorKind::AlreadyExists));
        assert_eq!(fs::read(&dest)?, b"keep");
        Ok(())
    }

    #[test]
    fn test_copy_file_is_exact() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("src.bin");
        let dest = dir.path().join("dest.bin");
        let data: Vec<u8> = (0..40_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&src, &data)?;

        assert_eq!(copy_file(&src, &dest)?, data.len() as u64);
        assert_eq!(fs::read(&dest)?, data);
        Ok(())
    }

    #[test]
    fn test_failed_pipe_removes_partial_output() -> io::Result<()> {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt"))
            }
        }

        let dir = tempfile::tempdir()?;
        let dest = dir.path().join("out");
        assert!(pipe_into_new(&mut Broken, &dest).is_err());
        assert!(!dest.exists());
        Ok(())
    }
}
