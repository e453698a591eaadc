//! Error types for pattern synthesis.
//!
//! All failures here are data-conditioned and non-retryable. Errors carry
//! the row and segment they occurred in so a failed ring pair can be traced
//! without affecting independent pairs.

use thiserror::Error;

use stitchkit_core::GeometryError;

/// Errors that can occur during pattern synthesis.
#[derive(Error, Debug)]
pub enum PatternError {
    /// A geometry precondition failed (degenerate ring, bad parameter).
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The neighbor ring is too small for shape classification.
    #[error("shape classification needs {need} neighbor points, ring has {have}")]
    ClassificationUnavailable {
        /// Points available on the neighbor ring.
        have: usize,
        /// Neighbors the classifier consults per point.
        need: usize,
    },

    /// No sequence of single/increase/decrease operations can consume both
    /// rings exactly.
    #[error("no stitch sequence connects {from_points} points to {to_points} points")]
    NoAlignment {
        /// Points on the source ring.
        from_points: usize,
        /// Points on the target ring.
        to_points: usize,
    },

    /// A failure while producing one row of a pattern.
    #[error("row {row}: {source}")]
    Row {
        /// 1-based row number.
        row: usize,
        /// The underlying failure.
        source: Box<PatternError>,
    },

    /// A failure while patterning one segment of an assembly.
    #[error("segment '{name}': {source}")]
    Segment {
        /// The segment's file name.
        name: String,
        /// The underlying failure.
        source: Box<PatternError>,
    },

    /// A segment contains no slices.
    #[error("segment '{name}' contains no slices")]
    EmptySegment {
        /// The segment's file name.
        name: String,
    },

    /// Attachment metadata references a segment that was never loaded.
    #[error("attachment references unknown segment '{name}'")]
    MissingSegment {
        /// The referenced segment name.
        name: String,
    },
}

impl PatternError {
    /// Wraps the error with the 1-based row it occurred in.
    pub fn in_row(self, row: usize) -> Self {
        PatternError::Row {
            row,
            source: Box::new(self),
        }
    }

    /// Wraps the error with the segment it occurred in.
    pub fn in_segment(self, name: impl Into<String>) -> Self {
        PatternError::Segment {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for pattern synthesis.
pub type PatternResult<T> = Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wrapping() {
        let err = PatternError::NoAlignment {
            from_points: 1,
            to_points: 3,
        }
        .in_row(4)
        .in_segment("body.json");
        assert_eq!(
            err.to_string(),
            "segment 'body.json': row 4: no stitch sequence connects 1 points to 3 points"
        );
    }

    #[test]
    fn test_geometry_conversion() {
        let err: PatternError = GeometryError::ZeroPerimeter.into();
        assert!(matches!(err, PatternError::Geometry(_)));
    }
}
