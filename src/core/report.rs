// BuildDigest - core/report.rs
//
// Renders segments as collapsible GitHub-Markdown blocks and caps the
// result at the platform's comment size.
// Core layer: pure text in, text out.

use crate::core::segment::{find_segments, Segment};

/// Limits applied while rendering a report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Lines of each segment kept in its code block.
    pub max_body_lines: usize,
    /// Hard cap on the rendered report, in characters.
    pub max_report_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        use crate::util::constants;
        Self {
            max_body_lines: constants::DEFAULT_MAX_BODY_LINES,
            max_report_chars: constants::DEFAULT_MAX_REPORT_CHARS,
        }
    }
}

/// One collapsible block in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry<'a> {
    /// 1-based position in the report.
    pub number: usize,
    /// The `error:` line shown in the summary heading.
    pub summary: &'a str,
    /// Leading lines of the segment shown in the code block.
    pub body: &'a str,
}

impl<'a> ReportEntry<'a> {
    pub fn from_segment(number: usize, segment: &Segment<'a>, config: &ReportConfig) -> Self {
        Self {
            number,
            summary: segment.error_summary(),
            body: segment.body(config.max_body_lines),
        }
    }

    /// Append this entry's Markdown to `out`.
    pub fn render_into(&self, out: &mut String) {
        out.push_str(&format!(
            "<details><summary>Error {}: <code>{}</code></summary>\n\n```text\n{}\n```\n</details>\n",
            self.number, self.summary, self.body
        ));
    }
}

/// Build one entry per segment, numbered from 1 in log order.
pub fn build_entries<'a>(raw_log: &'a str, config: &ReportConfig) -> Vec<ReportEntry<'a>> {
    find_segments(raw_log)
        .iter()
        .enumerate()
        .map(|(i, segment)| ReportEntry::from_segment(i + 1, segment, config))
        .collect()
}

/// Concatenate the rendered entries and cut the result at
/// `config.max_report_chars` characters.
///
/// The cut is a plain character slice: it may land inside an HTML tag or an
/// open code fence.
pub fn render_entries(entries: &[ReportEntry<'_>], config: &ReportConfig) -> String {
    let mut report = String::new();
    for entry in entries {
        entry.render_into(&mut report);
    }

    let kept = truncate_chars(&report, config.max_report_chars).len();
    if kept < report.len() {
        tracing::warn!(
            entries = entries.len(),
            bytes = report.len(),
            kept_bytes = kept,
            max_chars = config.max_report_chars,
            "Report truncated to size cap"
        );
        report.truncate(kept);
    }
    report
}

/// Turn a raw build log into a Markdown error report using default limits.
///
/// Returns an empty string when the log has no failing compilation unit.
pub fn generate_report(raw_log: &str) -> String {
    generate_report_with(raw_log, &ReportConfig::default())
}

/// Same as [`generate_report`] with explicit limits.
pub fn generate_report_with(raw_log: &str, config: &ReportConfig) -> String {
    let entries = build_entries(raw_log, config);
    tracing::debug!(entries = entries.len(), "Report entries built");
    render_entries(&entries, config)
}

/// The longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
