// BuildDigest - app/digest.rs
//
// One digest run: read the log, build the report, emit it.
// Kept free of process state (argv, exit codes) so it can be driven
// directly from tests.

use crate::core::report;
use crate::platform::fs;
use crate::util::error::{OutputError, Result};
use std::io::Write;
use std::path::Path;

/// Read `log_file` and return its Markdown error report.
///
/// An empty string means the log had no failing compilation unit.
pub fn run(log_file: &Path) -> Result<String> {
    let content = fs::read_log(log_file)?;
    let report = report::generate_report(&content);

    tracing::info!(
        path = %log_file.display(),
        report_chars = report.chars().count(),
        "Report generated"
    );
    Ok(report)
}

/// Write `report` followed by a newline and flush.
///
/// An empty report still produces the newline.
pub fn emit<W: Write>(report: &str, mut writer: W) -> Result<()> {
    writeln!(writer, "{report}")
        .and_then(|()| writer.flush())
        .map_err(|e| OutputError::Stdout { source: e })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::{DigestError, InputError};

    #[test]
    fn test_run_missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&dir.path().join("missing.log"));
        assert!(
            matches!(result, Err(DigestError::Input(InputError::NotFound { .. }))),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn test_emit_appends_newline() {
        let mut buf = Vec::new();
        emit("report", &mut buf).unwrap();
        assert_eq!(buf, b"report\n");

        let mut buf = Vec::new();
        emit("", &mut buf).unwrap();
        assert_eq!(buf, b"\n");
    }

    #[test]
    fn test_emit_write_failure_is_output_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = emit("report", Closed);
        assert!(matches!(result, Err(DigestError::Output(_))));
    }
}
