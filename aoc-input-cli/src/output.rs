//! Writing the downloaded input to disk

use crate::error::CliError;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Create (or truncate) `path` and copy all of `body` into it
///
/// Returns the number of bytes written. A failure part way through leaves
/// whatever was already written on disk.
pub fn write_input<R: Read + ?Sized>(body: &mut R, path: &Path) -> Result<u64, CliError> {
    let file = File::create(path).map_err(|source| CliError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;

    let write_error = |source| CliError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    let bytes = io::copy(body, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Yields some bytes, then fails
    struct BrokenBody {
        sent: bool,
    }

    impl Read for BrokenBody {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            self.sent = true;
            buf[..4].copy_from_slice(b"1,2,");
            Ok(4)
        }
    }

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("aoc_2024_1.txt");

        let bytes = write_input(&mut "1,2,3".as_bytes(), &path).unwrap();

        assert_eq!(bytes, 5);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,2,3");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("aoc_2024_1.txt");
        std::fs::write(&path, "a much longer previous input\n").unwrap();

        write_input(&mut "new".as_bytes(), &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_create_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no_such_dir").join("input.txt");

        let err = write_input(&mut "1,2,3".as_bytes(), &path).unwrap_err();

        assert!(matches!(err, CliError::CreateFile { .. }));
        assert!(err.to_string().starts_with("Failed to create input file"));
    }

    #[test]
    fn test_body_failure_keeps_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");

        let err = write_input(&mut BrokenBody { sent: false }, &path).unwrap_err();

        assert!(matches!(err, CliError::WriteFile { .. }));
        assert!(
            err.to_string()
                .starts_with("Failed to write response to input file")
        );
        assert!(path.exists());
    }
}
