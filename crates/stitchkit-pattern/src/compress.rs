//! Run-length compression of stitch sequences into pattern lines.

use crate::align::StitchKind;

/// Compresses an operation-kind sequence into a pattern line.
///
/// Maximal runs of the same kind render as `"<kind> x<count>"`; runs of one
/// render as just `"<kind>"`. Entries are joined by `", "`. An empty
/// sequence yields an empty string.
pub fn compress(kinds: &[StitchKind]) -> String {
    let mut entries: Vec<String> = Vec::new();
    let mut iter = kinds.iter();
    let Some(mut current) = iter.next() else {
        return String::new();
    };
    let mut count = 1usize;

    for kind in iter {
        if kind == current {
            count += 1;
        } else {
            entries.push(render_run(*current, count));
            current = kind;
            count = 1;
        }
    }
    entries.push(render_run(*current, count));
    entries.join(", ")
}

fn render_run(kind: StitchKind, count: usize) -> String {
    if count > 1 {
        format!("{} x{}", kind, count)
    } else {
        kind.to_string()
    }
}

/// Expands a pattern line back into its operation-kind sequence.
///
/// Inverse of [`compress`]; fails on labels or counts it does not
/// recognize.
pub fn expand(line: &str) -> Result<Vec<StitchKind>, String> {
    let mut kinds = Vec::new();
    for entry in line.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (label, count) = match entry.split_once(" x") {
            Some((label, count)) => {
                let count: usize = count
                    .parse()
                    .map_err(|_| format!("Invalid run count: {}", entry))?;
                (label, count)
            }
            None => (entry, 1),
        };
        let kind: StitchKind = label.parse()?;
        kinds.extend(std::iter::repeat(kind).take(count));
    }
    Ok(kinds)
}
