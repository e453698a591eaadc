//! Textual rendering of finished patterns.

use std::fmt::Write;

use crate::assembly::SegmentPattern;

/// Renders one segment's pattern: a header line, the optional sew-on note,
/// then one `Row N: <line>  (<count>)` line per row, the trailing count
/// being the stitch count of the row's target ring.
pub fn render_segment(pattern: &SegmentPattern) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", pattern.name);
    if let Some(note) = &pattern.note {
        let _ = writeln!(out, "{}", note);
    }
    for row in &pattern.rows {
        let _ = writeln!(out, "Row {}: {}  ({})", row.row, row.line, row.target_count);
    }
    out
}

/// Renders a whole assembly's patterns, segments separated by blank lines.
pub fn render_document(patterns: &[SegmentPattern]) -> String {
    patterns
        .iter()
        .map(render_segment)
        .collect::<Vec<_>>()
        .join("\n")
}
