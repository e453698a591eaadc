//! Error types for the core geometry crate.
//!
//! All error types use `thiserror`. Geometry errors are data-conditioned and
//! deterministic: the same input always fails the same way, and no partial
//! state survives a failure.

use std::io;
use thiserror::Error;

/// Errors raised by ring construction, resampling, and parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A ring was supplied with fewer points than the operation requires.
    #[error("ring has {got} points, at least {needed} required")]
    TooFewPoints {
        /// Minimum number of points the operation needs.
        needed: usize,
        /// Number of points actually supplied.
        got: usize,
    },

    /// Every point of the ring is coincident, so it has no arc length.
    #[error("ring perimeter is zero (all points coincident)")]
    ZeroPerimeter,

    /// A length or spacing parameter that must be strictly positive was not.
    #[error("'{name}' must be positive, got {value}")]
    NonPositiveParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Resampling at the requested spacing would leave too few points to
    /// form a closed ring.
    #[error(
        "spacing {spacing} too coarse for perimeter {perimeter:.4}: \
         {points} resampled points, at least {needed} required"
    )]
    SpacingTooCoarse {
        /// The requested arc-length spacing.
        spacing: f64,
        /// The ring perimeter.
        perimeter: f64,
        /// Number of points the resample would have produced.
        points: usize,
        /// Minimum number of points a ring must have.
        needed: usize,
    },
}

/// Errors raised while reading slice data from disk.
#[derive(Error, Debug)]
pub enum SliceDataError {
    /// I/O error while scanning a folder or reading a slice file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A slice file contained malformed JSON.
    #[error("JSON error in {path}: {source}")]
    Json {
        /// Path of the offending file.
        path: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Result type alias for slice data loading.
pub type SliceDataResult<T> = Result<T, SliceDataError>;
