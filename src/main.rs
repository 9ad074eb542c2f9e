// BuildDigest - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. One digest run, report to stdout, errors to stderr with exit status 1

use builddigest::{app, util};
use clap::Parser;
use std::path::PathBuf;

/// BuildDigest - Compiler error digest for CI comments.
///
/// Reads a build log, extracts the first compiler error of every failing
/// compilation unit, and prints a collapsible GitHub-Markdown report.
#[derive(Parser, Debug)]
#[command(name = "builddigest", version, about)]
struct Cli {
    /// Build log to process.
    log_file: PathBuf,

    /// Enable debug logging on stderr (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Render an error with its full `source()` chain on one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        if !msg.contains(&cause_msg) {
            msg.push_str(": ");
            msg.push_str(&cause_msg);
        }
        source = cause.source();
    }
    msg
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::debug!(
        version = util::constants::APP_VERSION,
        log_file = %cli.log_file.display(),
        "BuildDigest starting"
    );

    let result = app::digest::run(&cli.log_file)
        .and_then(|report| app::digest::emit(&report, std::io::stdout().lock()));

    if let Err(e) = result {
        tracing::error!(error = %e, "Digest failed");
        eprintln!("Error: {}", error_chain(&e));
        std::process::exit(1);
    }
}
