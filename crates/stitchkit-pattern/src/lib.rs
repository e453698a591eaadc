//! # Stitchkit Pattern
//!
//! Contour correspondence and pattern compression: classifies each ring
//! point as bulge or indent against the adjacent ring, aligns consecutive
//! rings with a three-move dynamic program (single, increase, decrease),
//! and compresses the winning operation sequence into row-by-row crochet
//! instructions. Segment assembly chains named pieces together, grafting
//! sew-on components into their parent's first row.

pub mod align;
pub mod assembly;
pub mod compress;
pub mod document;
pub mod error;
pub mod row;
pub mod shape;

pub use align::{align, Alignment, Operation, StitchKind};
pub use assembly::{Assembly, AttachMode, Attachment, Segment, SegmentPattern};
pub use compress::{compress, expand};
pub use document::{render_document, render_segment};
pub use error::{PatternError, PatternResult};
pub use row::{pattern_row, pattern_slices, prepare_ring, RowPattern};
pub use shape::{classify, ShapeClass};
