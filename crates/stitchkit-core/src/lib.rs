//! # Stitchkit Core
//!
//! Core geometry for crochet pattern synthesis: contour points and rings,
//! angular ordering of unordered boundary samples, uniform arc-length
//! resampling, pairwise distance matrices, the on-disk slice data model,
//! and the shared parameter set.

pub mod data;
pub mod distance;
pub mod error;
pub mod params;
pub mod point;
pub mod resample;
pub mod ring;

pub use data::{load_attachments, load_segments, AttachmentData, SegmentData};
pub use distance::DistanceMatrix;
pub use error::{GeometryError, GeometryResult, SliceDataError, SliceDataResult};
pub use params::PatternParams;
pub use point::{centroid, Point};
pub use resample::resample;
pub use ring::Ring;
