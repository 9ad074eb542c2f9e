// BuildDigest - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "BuildDigest";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Segmentation
// =============================================================================

/// Progress marker emitted by the build tool before each compiled unit,
/// e.g. `[ 42%]` or `[100%]`.
pub const PROGRESS_MARKER_PATTERN: &str = r"\[\s*\d+%\s*\]";

/// Literal text that qualifies a span as a failing compilation unit.
pub const ERROR_MARKER: &str = "error:";

/// Characters that end an error summary line.
pub const SUMMARY_TERMINATORS: &[char] = &['\n', ';', '('];

// =============================================================================
// Report limits
// =============================================================================

/// Number of lines of each segment shown inside its collapsible block.
pub const DEFAULT_MAX_BODY_LINES: usize = 30;

/// Hard cap on the rendered report, in characters.
///
/// Stays below GitHub's 65,536-character comment body limit.
pub const DEFAULT_MAX_REPORT_CHARS: usize = 65_300;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is given.
///
/// Diagnostics go to stderr; `warn` keeps CI output quiet unless something
/// is actually wrong.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
