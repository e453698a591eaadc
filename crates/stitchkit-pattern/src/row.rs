//! The per-row pattern pipeline.
//!
//! For each pair of consecutive rings: distance matrix, shape
//! classification, alignment, compression. Ring pairs are independent; a
//! failure aborts only its own row and carries the row number in the error.

use tracing::debug;

use stitchkit_core::{resample, DistanceMatrix, PatternParams, Point, Ring};

use crate::align::{align, Operation};
use crate::compress::compress;
use crate::error::PatternResult;
use crate::shape::classify;

/// One row of a finished pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPattern {
    /// 1-based row number within its segment.
    pub row: usize,
    /// The compressed pattern line, e.g. `"sc x4, inc, sc"`.
    pub line: String,
    /// The underlying operations, for downstream consumers that need the
    /// exact point correspondences.
    pub ops: Vec<Operation>,
    /// Stitch count of the target ring, conventionally printed after the
    /// row instructions.
    pub target_count: usize,
}

/// Prepares one raw slice for alignment: optional angular sort, optional
/// resample, per the parameters.
pub fn prepare_ring(points: Vec<Point>, params: &PatternParams) -> PatternResult<Ring> {
    let ring = if params.sort_points {
        Ring::from_unordered(points)?
    } else {
        Ring::new(points)?
    };
    match params.resample_spacing {
        Some(spacing) => Ok(resample(&ring, spacing)?),
        None => Ok(ring),
    }
}

/// Connects one ring to the next and compresses the result.
pub fn pattern_row(
    row: usize,
    source: &Ring,
    target: &Ring,
    params: &PatternParams,
) -> PatternResult<RowPattern> {
    let dist = DistanceMatrix::build(source.points(), target.points());
    let shapes = classify(source, target, &dist, params.neighbor_count)?;
    let alignment = align(&dist, &shapes, params)?;
    debug!(
        row,
        from = source.len(),
        to = target.len(),
        cost = alignment.cost,
        "aligned ring pair"
    );
    let line = compress(&alignment.kinds());
    Ok(RowPattern {
        row,
        line,
        ops: alignment.ops,
        target_count: target.len(),
    })
}

/// Runs the full pipeline over a stack of raw slices.
///
/// Each slice is prepared per the parameters, then every consecutive pair
/// becomes one row. Errors are wrapped with the 1-based row they occurred
/// in (ring preparation failures count against the row whose source or
/// target the ring is - the first row it takes part in).
pub fn pattern_slices(
    slices: &[Vec<Point>],
    params: &PatternParams,
) -> PatternResult<Vec<RowPattern>> {
    params.validate()?;

    let mut rings = Vec::with_capacity(slices.len());
    for (i, slice) in slices.iter().enumerate() {
        let ring = prepare_ring(slice.clone(), params).map_err(|e| e.in_row(i.max(1)))?;
        rings.push(ring);
    }

    let mut rows = Vec::new();
    for (i, pair) in rings.windows(2).enumerate() {
        let row = i + 1;
        let pattern =
            pattern_row(row, &pair[0], &pair[1], params).map_err(|e| e.in_row(row))?;
        rows.push(pattern);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    fn circle(n: usize, radius: f64, z: f64) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
                Point::new(radius * theta.cos(), radius * theta.sin(), z)
            })
            .collect()
    }

    #[test]
    fn test_matched_pair_is_all_singles() {
        let params = PatternParams {
            stitch_width: 2.0_f64.sqrt(),
            ..Default::default()
        };
        let slices = vec![circle(4, 1.0, 0.0), circle(4, 1.0, 0.0)];
        let rows = pattern_slices(&slices, &params).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].line, "sc x4");
        assert_eq!(rows[0].target_count, 4);
    }

    #[test]
    fn test_single_slice_yields_no_rows() {
        let rows =
            pattern_slices(&[circle(6, 1.0, 0.0)], &PatternParams::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_row_error_carries_row_number() {
        // The third slice is degenerate; it first takes part in row 2
        // (second ring pair), and the error says so.
        let slices = vec![
            circle(6, 1.0, 0.0),
            circle(6, 1.0, 0.2),
            vec![Point::new(0.0, 0.0, 0.4), Point::new(1.0, 0.0, 0.4)],
        ];
        let err = pattern_slices(&slices, &PatternParams::default()).unwrap_err();
        let PatternError::Row { row, .. } = err else {
            panic!("expected row context, got {err}");
        };
        assert_eq!(row, 2);
    }

    #[test]
    fn test_sort_and_resample_are_applied() {
        let params = PatternParams {
            stitch_width: 0.3,
            resample_spacing: Some(0.3),
            sort_points: true,
            ..Default::default()
        };
        // Shuffle one circle; sorting plus resampling still lines the pair
        // up for alignment.
        let mut shuffled = circle(12, 1.0, 0.0);
        shuffled.swap(0, 7);
        shuffled.swap(3, 11);
        let slices = vec![shuffled, circle(12, 1.0, 0.2)];

        let rows = pattern_slices(&slices, &params).unwrap();
        assert_eq!(rows.len(), 1);
        // Perimeter of a 12-gon at radius 1 is ~6.21, so both rings
        // resample to floor(6.21 / 0.3) = 20 points.
        assert_eq!(rows[0].target_count, 20);
    }

    #[test]
    fn test_invalid_params_rejected_up_front() {
        let params = PatternParams {
            stitch_width: -1.0,
            ..Default::default()
        };
        assert!(pattern_slices(&[], &params).is_err());
    }
}
