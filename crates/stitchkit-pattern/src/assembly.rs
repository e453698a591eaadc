//! Multi-segment assembly.
//!
//! A sliced model usually arrives as several named segments (body, head,
//! limbs). Segments either stand alone, get worked separately and attached
//! by hand, or get sewn on: the child's final ring is lifted and grafted
//! into the parent's first row so the two pieces share a seam. All
//! bookkeeping - which segments are done, what rows they produced - is
//! explicit state owned by the assembly run.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use stitchkit_core::{AttachmentData, PatternParams, Point, SegmentData};

use crate::error::{PatternError, PatternResult};
use crate::row::{pattern_slices, RowPattern};

/// How a child segment connects to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachMode {
    /// The child's last ring is grafted into the parent's first row.
    SewOn,
    /// The child is worked as its own piece and attached by hand.
    Separate,
}

/// One parent-child attachment edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub child: String,
    pub mode: AttachMode,
}

/// A named segment: its raw slices in stacking order.
#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub slices: Vec<Vec<Point>>,
}

/// The finished pattern for one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPattern {
    pub name: String,
    /// Assembly instruction emitted when sew-on children feed this
    /// segment's first row.
    pub note: Option<String>,
    pub rows: Vec<RowPattern>,
}

/// An ordered collection of segments plus their attachment edges.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    segments: Vec<Segment>,
    attachments: BTreeMap<String, Vec<Attachment>>,
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an assembly from loaded segment files and optional
    /// attachment metadata (mode `0` = sew-on, anything else = separate).
    pub fn from_data(
        segments: Vec<(String, SegmentData)>,
        attachments: Option<&AttachmentData>,
    ) -> Self {
        let mut assembly = Self::new();
        for (name, data) in segments {
            assembly.push_segment(Segment {
                name,
                slices: data.point_lists(),
            });
        }
        if let Some(meta) = attachments {
            for (parent, children) in &meta.parents {
                for (child, mode) in children {
                    let mode = if *mode == 0 {
                        AttachMode::SewOn
                    } else {
                        AttachMode::Separate
                    };
                    assembly.attach(parent, child, mode);
                }
            }
        }
        assembly
    }

    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn attach(&mut self, parent: &str, child: &str, mode: AttachMode) {
        self.attachments
            .entry(parent.to_string())
            .or_default()
            .push(Attachment {
                child: child.to_string(),
                mode,
            });
    }

    /// Patterns every segment, sew-on children before their parents.
    ///
    /// For each sew-on child: its last ring is lifted by `sew_on_lift`
    /// along +z and appended to the child as one extra row, and the lifted
    /// points are pooled into the parent's new first ring. The parent's
    /// pattern gains a note naming the grafted components. Segments appear
    /// in the output in completion order, each exactly once.
    pub fn run(&self, params: &PatternParams) -> PatternResult<Vec<SegmentPattern>> {
        let mut completed: BTreeSet<String> = BTreeSet::new();
        let mut output: Vec<SegmentPattern> = Vec::new();
        // Slices accumulated per segment over the run; sew-on handling
        // mutates this map, never the assembly itself.
        let mut working: BTreeMap<String, Vec<Vec<Point>>> = self
            .segments
            .iter()
            .map(|s| (s.name.clone(), s.slices.clone()))
            .collect();

        for segment in &self.segments {
            if completed.contains(&segment.name) {
                continue;
            }
            info!(segment = %segment.name, "processing segment");

            let sew_ons: Vec<&Attachment> = self
                .attachments
                .get(&segment.name)
                .into_iter()
                .flatten()
                .filter(|a| a.mode == AttachMode::SewOn)
                .collect();

            let mut seam_pool: Vec<Point> = Vec::new();
            for attachment in &sew_ons {
                let child_slices = working
                    .get_mut(&attachment.child)
                    .ok_or_else(|| PatternError::MissingSegment {
                        name: attachment.child.clone(),
                    })?;
                let last = child_slices
                    .last()
                    .ok_or_else(|| PatternError::EmptySegment {
                        name: attachment.child.clone(),
                    })?;
                let lifted: Vec<Point> =
                    last.iter().map(|p| p.lifted(params.sew_on_lift)).collect();
                child_slices.push(lifted.clone());

                if !completed.contains(&attachment.child) {
                    let rows = pattern_slices(child_slices, params)
                        .map_err(|e| e.in_segment(&attachment.child))?;
                    output.push(SegmentPattern {
                        name: attachment.child.clone(),
                        note: None,
                        rows,
                    });
                    completed.insert(attachment.child.clone());
                }
                seam_pool.extend(lifted);
            }

            let slices = working
                .get_mut(&segment.name)
                .ok_or_else(|| PatternError::MissingSegment {
                    name: segment.name.clone(),
                })?;
            if slices.is_empty() {
                return Err(PatternError::EmptySegment {
                    name: segment.name.clone(),
                });
            }

            let note = if seam_pool.is_empty() {
                None
            } else {
                let names: Vec<&str> = sew_ons.iter().map(|a| a.child.as_str()).collect();
                slices.insert(0, seam_pool);
                Some(format!(
                    "NOTE: For this segment, sew-on across all {} components ({}) to attach",
                    names.len(),
                    names.join(", ")
                ))
            };

            let rows = pattern_slices(slices, params)
                .map_err(|e| e.in_segment(&segment.name))?;
            output.push(SegmentPattern {
                name: segment.name.clone(),
                note,
                rows,
            });
            completed.insert(segment.name.clone());
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(n: usize, radius: f64, z: f64) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
                Point::new(radius * theta.cos(), radius * theta.sin(), z)
            })
            .collect()
    }

    fn cylinder(name: &str, slices: usize, n: usize) -> Segment {
        Segment {
            name: name.to_string(),
            slices: (0..slices).map(|i| circle(n, 1.0, 0.2 * i as f64)).collect(),
        }
    }

    fn params() -> PatternParams {
        PatternParams {
            stitch_width: 0.25,
            ..Default::default()
        }
    }

    #[test]
    fn test_standalone_segments_in_order() {
        let mut assembly = Assembly::new();
        assembly.push_segment(cylinder("body.json", 3, 8));
        assembly.push_segment(cylinder("head.json", 2, 8));

        let patterns = assembly.run(&params()).unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].name, "body.json");
        assert_eq!(patterns[0].rows.len(), 2);
        assert_eq!(patterns[1].name, "head.json");
        assert_eq!(patterns[1].rows.len(), 1);
        assert!(patterns[0].note.is_none());
    }

    #[test]
    fn test_sew_on_child_precedes_parent() {
        let mut assembly = Assembly::new();
        assembly.push_segment(cylinder("body.json", 2, 8));
        assembly.push_segment(cylinder("ear.json", 2, 8));
        assembly.attach("body.json", "ear.json", AttachMode::SewOn);

        let patterns = assembly.run(&params()).unwrap();
        assert_eq!(patterns.len(), 2);

        // The child is patterned first, with one extra row for the lifted
        // seam ring.
        assert_eq!(patterns[0].name, "ear.json");
        assert_eq!(patterns[0].rows.len(), 2);

        // The parent gains a first row fed by the seam and a sew-on note.
        assert_eq!(patterns[1].name, "body.json");
        assert_eq!(patterns[1].rows.len(), 2);
        let note = patterns[1].note.as_deref().unwrap();
        assert!(note.contains("1 components"));
        assert!(note.contains("ear.json"));
    }

    #[test]
    fn test_sewn_child_not_patterned_twice() {
        let mut assembly = Assembly::new();
        assembly.push_segment(cylinder("ear.json", 2, 8));
        assembly.push_segment(cylinder("body.json", 2, 8));
        assembly.attach("body.json", "ear.json", AttachMode::SewOn);

        let patterns = assembly.run(&params()).unwrap();
        let names: Vec<&str> = patterns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ear.json", "body.json"]);
    }

    #[test]
    fn test_separate_attachment_changes_nothing() {
        let mut assembly = Assembly::new();
        assembly.push_segment(cylinder("body.json", 2, 8));
        assembly.push_segment(cylinder("arm.json", 2, 8));
        assembly.attach("body.json", "arm.json", AttachMode::Separate);

        let patterns = assembly.run(&params()).unwrap();
        assert_eq!(patterns[0].name, "body.json");
        assert!(patterns[0].note.is_none());
        assert_eq!(patterns[0].rows.len(), 1);
        assert_eq!(patterns[1].rows.len(), 1);
    }

    #[test]
    fn test_missing_child_fails() {
        let mut assembly = Assembly::new();
        assembly.push_segment(cylinder("body.json", 2, 8));
        assembly.attach("body.json", "ghost.json", AttachMode::SewOn);

        let err = assembly.run(&params()).unwrap_err();
        assert!(matches!(err, PatternError::MissingSegment { name } if name == "ghost.json"));
    }

    #[test]
    fn test_empty_segment_fails() {
        let mut assembly = Assembly::new();
        assembly.push_segment(Segment {
            name: "hollow.json".to_string(),
            slices: vec![],
        });
        let err = assembly.run(&params()).unwrap_err();
        assert!(matches!(err, PatternError::EmptySegment { name } if name == "hollow.json"));
    }
}
