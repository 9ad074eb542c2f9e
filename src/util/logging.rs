// BuildDigest - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets the filter to debug)
//
// Output: always stderr. Stdout is reserved for the report itself, which is
// usually piped straight into a CI comment.

use tracing_subscriber::EnvFilter;

/// Build the filter with the correct priority.
///
/// Priority: RUST_LOG env var > CLI --debug flag > default level.
fn build_filter(debug_flag: bool) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
pub fn init(debug_flag: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug_flag))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
