//! Reading `du` reports from files or standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read every line of `reader`.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8. The
/// message names the 1-based line that could not be read.
pub fn read_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line
            .map_err(|e| io::Error::new(e.kind(), format!("line {}: {e}", lines.len() + 1)))?;
        lines.push(line);
    }
    Ok(lines)
}

/// Read and concatenate the lines of all `paths`, in order.
///
/// An empty list, or a `-` entry, reads standard input.
///
/// # Errors
///
/// Returns an error naming the input that could not be opened or read.
pub fn read_lines(paths: &[PathBuf]) -> Result<Vec<String>> {
    if paths.is_empty() {
        return read_stdin();
    }

    let mut lines = Vec::new();
    for path in paths {
        if path.as_os_str() == STDIN_PATH {
            lines.extend(read_stdin()?);
        } else {
            lines.extend(read_file(path)?);
        }
    }
    Ok(lines)
}

fn read_stdin() -> Result<Vec<String>> {
    let lines = read_reader(io::stdin().lock())
        .map_err(|e| anyhow::anyhow!("Failed to read standard input: {e}"))?;
    debug!("read {} lines from standard input", lines.len());
    Ok(lines)
}

fn read_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", path.display()))?;
    let lines = read_reader(BufReader::new(file))
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_reader_splits_lines() {
        let lines = read_reader("1 a\n2 b\r\n3 c".as_bytes()).unwrap();
        assert_eq!(lines, vec!["1 a", "2 b", "3 c"]);
    }

    #[test]
    fn test_read_lines_concatenates_files() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "1 a\n2 b\n").unwrap();
        fs::write(&second, "3 c\n").unwrap();

        let lines = read_lines(&[first, second]).unwrap();
        assert_eq!(lines, vec!["1 a", "2 b", "3 c"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = read_lines(&[missing.clone()]).unwrap_err();
        assert!(err.to_string().contains(&missing.display().to_string()));
    }

    #[test]
    fn test_read_lines_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [b'1', b' ', 0xff, 0xfe, b'\n']).unwrap();

        assert!(read_lines(&[path]).is_err());
    }

    #[test]
    fn test_read_reader_names_bad_line() {
        let input: &[u8] = b"1 a\n2 b\n3 \xff\n4 d\n";
        let err = read_reader(input).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 3: "), "{err}");
    }

    #[test]
    fn test_read_lines_error_names_file_and_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.du");
        fs::write(&path, [b'1', b' ', b'a', b'\n', b'2', b' ', 0xff, b'\n']).unwrap();

        let message = read_lines(&[path]).unwrap_err().to_string();
        assert!(message.contains("report.du"), "{message}");
        assert!(message.contains("line 2"), "{message}");
    }
}
