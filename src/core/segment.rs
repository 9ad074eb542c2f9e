// BuildDigest - core/segment.rs
//
// Splits a raw build log into the segments that belong to failing
// compilation units.
// Core layer: operates on borrowed text, never touches the filesystem.
//
// Scan is two-phase: locate every progress marker, then take the span from
// each marker to the next marker not glued to it (or end of input) and keep
// it only if it contains `error:`. Each byte of the log belongs to at most one segment and
// segments come out in log order.

use crate::util::constants::{ERROR_MARKER, PROGRESS_MARKER_PATTERN, SUMMARY_TERMINATORS};
use regex::Regex;
use std::sync::OnceLock;

/// The compiled progress-marker regex, e.g. `[ 42%]`.
pub fn progress_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(PROGRESS_MARKER_PATTERN).expect("progress marker: invalid regex"))
}

/// Console output of one failing compilation unit.
///
/// Only [`find_segments`] can build a `Segment`, and it only does so after
/// locating `error:` inside the span, so every segment has an error summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    text: &'a str,
    start: usize,
    /// Offset of the first `error:` within `text`.
    error_at: usize,
}

impl<'a> Segment<'a> {
    /// Build a segment spanning `raw[start..end]` whose marker ends at
    /// `marker_end`, or `None` if the span has no `error:`.
    ///
    /// The span qualifies only if an `error:` starts at least one character
    /// after the marker. The summary then comes from the first `error:`
    /// anywhere in the span.
    fn new(raw: &'a str, start: usize, marker_end: usize, end: usize) -> Option<Self> {
        let after_marker = &raw[marker_end..end];
        let skip = after_marker.chars().next()?.len_utf8();
        after_marker[skip..].find(ERROR_MARKER)?;

        let text = &raw[start..end];
        Some(Self {
            text,
            start,
            error_at: text.find(ERROR_MARKER)?,
        })
    }

    /// Full text of the segment, starting with its progress marker.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the segment within the raw log.
    pub fn start(&self) -> usize {
        self.start
    }

    /// First `error:` line, cut at newline, `;` or `(`, right-trimmed.
    pub fn error_summary(&self) -> &'a str {
        let tail = &self.text[self.error_at..];
        let line = match tail.find(SUMMARY_TERMINATORS) {
            Some(idx) => &tail[..idx],
            None => tail,
        };
        line.trim_end()
    }

    /// The first `max_lines` lines of the segment, right-trimmed.
    pub fn body(&self, max_lines: usize) -> &'a str {
        if max_lines == 0 {
            return "";
        }
        let kept = match self.text.match_indices('\n').nth(max_lines - 1) {
            Some((idx, _)) => &self.text[..idx],
            None => self.text,
        };
        kept.trim_end()
    }
}

/// Find every segment in `raw_log`, in order of occurrence.
///
/// Spans between markers that carry no `error:` are skipped. A marker glued
/// directly to the end of the previous one does not close the span. When no
/// marker follows, the last span runs to end of input minus one trailing
/// newline.
pub fn find_segments(raw_log: &str) -> Vec<Segment<'_>> {
    let markers: Vec<_> = progress_marker().find_iter(raw_log).collect();
    let input_end = raw_log.strip_suffix('\n').map_or(raw_log.len(), str::len);

    let mut segments = Vec::new();
    let mut resume_at = 0;
    for (i, marker) in markers.iter().enumerate() {
        // Already inside an emitted segment.
        if marker.start() < resume_at {
            continue;
        }
        let end = markers[i + 1..]
            .iter()
            .find(|next| next.start() > marker.end())
            .map_or(input_end, |next| next.start());
        match Segment::new(raw_log, marker.start(), marker.end(), end) {
            Some(segment) => {
                resume_at = end;
                segments.push(segment);
            }
            None => tracing::trace!(offset = marker.start(), "Span without error skipped"),
        }
    }

    tracing::debug!(
        markers = markers.len(),
        segments = segments.len(),
        "Build log segmented"
    );
    segments
}
