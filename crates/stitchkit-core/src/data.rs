//! On-disk slice data model.
//!
//! The slicing exporter writes one JSON file per body-part segment. Each
//! file is an object mapping slice names (`slice_a`, `slice_b`, ...) to
//! arrays of `[x, y, z]` point triples, bottom slice first; lexicographic
//! slice-name order is the stacking order. An optional `metadata.json` in
//! the same folder describes how segments attach to each other.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SliceDataError, SliceDataResult};
use crate::point::Point;

/// Name of the optional attachment metadata file.
pub const METADATA_FILE: &str = "metadata.json";

/// One segment's slices, keyed by slice name in stacking order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentData {
    pub slices: BTreeMap<String, Vec<[f64; 3]>>,
}

impl SegmentData {
    /// Number of slices in the segment.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// The slices as point lists, in stacking order.
    pub fn point_lists(&self) -> Vec<Vec<Point>> {
        self.slices
            .values()
            .map(|raw| raw.iter().map(|&c| Point::from(c)).collect())
            .collect()
    }

    /// Reads a single segment file.
    pub fn load(path: &Path) -> SliceDataResult<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| SliceDataError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Attachment metadata: for each parent segment file, the child segments to
/// connect to it. Mode `0` means sew-on (the child's last ring is grafted
/// into the parent's first row); any other value means the child is worked
/// as a separate piece and attached by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentData {
    pub parents: BTreeMap<String, Vec<(String, u8)>>,
}

/// Scans a folder for `*.json` segment files.
///
/// Returns `(file name, segment data)` pairs sorted by file name. The
/// metadata file is skipped; missing folders surface as I/O errors.
pub fn load_segments(folder: &Path) -> SliceDataResult<Vec<(String, SegmentData)>> {
    let mut segments = Vec::new();
    let mut names = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".json") && name != METADATA_FILE {
            names.push((name, entry.path()));
        }
    }
    names.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, path) in names {
        info!("reading {}", name);
        let data = SegmentData::load(&path)?;
        debug!(segment = %name, slices = data.len(), "loaded segment");
        segments.push((name, data));
    }
    Ok(segments)
}

/// Reads the optional attachment metadata from a slice folder.
pub fn load_attachments(folder: &Path) -> SliceDataResult<Option<AttachmentData>> {
    let path = folder.join(METADATA_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path)?;
    let data = serde_json::from_str(&text).map_err(|source| SliceDataError::Json {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(data))
}
