// BuildDigest - platform/fs.rs
//
// Filesystem access for the build log. The only I/O the core pipeline needs.

use crate::util::error::InputError;
use std::io;
use std::path::Path;

/// Read the full content of a build log as UTF-8 text.
///
/// Invalid UTF-8 is reported as an error, never converted lossily.
/// Line endings are normalised to `\n` (see [`normalize_newlines`]).
pub fn read_log(path: &Path) -> Result<String, InputError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ if path.is_dir() => InputError::NotAFile {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Build log read");

    let content = String::from_utf8(bytes).map_err(|e| InputError::InvalidEncoding {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(normalize_newlines(content))
}

/// Turn `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_log_returns_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.log");
        fs::write(&path, "[ 10%] a.cpp\nerror: x\n").unwrap();

        assert_eq!(read_log(&path).unwrap(), "[ 10%] a.cpp\nerror: x\n");
    }

    #[test]
    fn test_read_log_normalises_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("windows.log");
        fs::write(&path, "[ 1%] a\r\nerror: x\r\nl3\rl4\r\n").unwrap();

        let content = read_log(&path).unwrap();
        assert_eq!(content, "[ 1%] a\nerror: x\nl3\nl4\n");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb".to_string()), "a\nb");
        assert_eq!(normalize_newlines("a\rb\r".to_string()), "a\nb\n");
        assert_eq!(normalize_newlines("a\r\r\nb".to_string()), "a\n\nb");
        assert_eq!(normalize_newlines("plain\n".to_string()), "plain\n");
    }

    #[test]
    fn test_read_log_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_log(&dir.path().join("nope.log"));
        assert!(
            matches!(result, Err(InputError::NotFound { .. })),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn test_read_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_log(dir.path());
        assert!(
            matches!(result, Err(InputError::NotAFile { .. })),
            "expected NotAFile, got {result:?}"
        );
    }

    #[test]
    fn test_read_log_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.log");
        fs::write(&path, [0x5b, 0x20, 0x31, 0x25, 0x5d, 0xff, 0xfe]).unwrap();

        let result = read_log(&path);
        assert!(
            matches!(result, Err(InputError::InvalidEncoding { .. })),
            "expected InvalidEncoding, got {result:?}"
        );
    }
}
