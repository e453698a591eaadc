//! # Stitchkit
//!
//! Crochet pattern synthesis from sliced 3D contours. A slicing exporter
//! (running inside the 3D-modeling host) cuts a model into closed contour
//! rings at successive heights; Stitchkit turns those rings into row-by-row
//! stitch instructions - single crochet, increase, decrease - choosing the
//! connections that need the fewest structurally-unnecessary expansions or
//! contractions while respecting locally detected bulges and indents.
//!
//! ## Architecture
//!
//! Stitchkit is organized as a workspace:
//!
//! 1. **stitchkit-core** - contour points and rings, angular ordering,
//!    uniform arc-length resampling, distance matrices, the slice data
//!    model, and shared parameters
//! 2. **stitchkit-pattern** - bulge/indent classification, the
//!    single/increase/decrease alignment DP, run-length pattern
//!    compression, row pipeline, and segment assembly
//! 3. **stitchkit** - the command-line binary that turns a folder of slice
//!    files into a pattern document

pub use stitchkit_core::{
    centroid, load_attachments, load_segments, resample, AttachmentData, DistanceMatrix,
    GeometryError, PatternParams, Point, Ring, SegmentData, SliceDataError,
};

pub use stitchkit_pattern::{
    align, classify, compress, expand, pattern_row, pattern_slices, prepare_ring,
    render_document, render_segment, Alignment, Assembly, AttachMode, Operation, PatternError,
    RowPattern, Segment, SegmentPattern, ShapeClass, StitchKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let fmt_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
