// BuildDigest - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every I/O failure carries the path it happened on.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all BuildDigest operations.
/// Errors are categorised by the side of the pipeline that produced them.
#[derive(Debug)]
pub enum DigestError {
    /// The build log could not be read.
    Input(InputError),

    /// The report could not be written.
    Output(OutputError),
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "Input error: {e}"),
            Self::Output(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for DigestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

/// Errors related to reading the build log.
#[derive(Debug)]
pub enum InputError {
    /// The log file does not exist.
    NotFound { path: PathBuf },

    /// The path exists but is a directory.
    NotAFile { path: PathBuf },

    /// The log file is not valid UTF-8 text.
    InvalidEncoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// Any other I/O error while reading the log file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Log file '{}' does not exist", path.display())
            }
            Self::NotAFile { path } => {
                write!(f, "Log path '{}' is not a file", path.display())
            }
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "I/O error reading '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<InputError> for DigestError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

/// Errors related to emitting the report.
#[derive(Debug)]
pub enum OutputError {
    /// Writing to standard output failed (closed pipe, full disk, ...).
    Stdout { source: io::Error },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout { source } => write!(f, "Failed to write report to stdout: {source}"),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stdout { source } => Some(source),
        }
    }
}

impl From<OutputError> for DigestError {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

/// Convenience type alias for BuildDigest results.
pub type Result<T> = std::result::Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_found_message_names_path() {
        let err = DigestError::from(InputError::NotFound {
            path: PathBuf::from("build/missing.log"),
        });
        let msg = err.to_string();
        assert!(msg.starts_with("Input error: "), "got: {msg}");
        assert!(msg.contains("build/missing.log"), "got: {msg}");
    }

    #[test]
    fn test_source_chain_is_preserved() {
        let err = DigestError::from(InputError::Io {
            path: PathBuf::from("build.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        let input = err.source().expect("top-level error has a source");
        let io_err = input.source().expect("input error keeps the io error");
        assert_eq!(io_err.to_string(), "denied");
    }

    #[test]
    fn test_output_error_wraps_io() {
        let err: DigestError = OutputError::Stdout {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        }
        .into();
        assert!(matches!(err, DigestError::Output(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
