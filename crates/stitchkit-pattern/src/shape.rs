//! Bulge/indent classification of ring points.
//!
//! A local-curvature proxy, not a true curvature estimate: a point is judged
//! by where its nearest neighbors on the adjacent ring sit relative to its
//! own ring's centroid. Approximate by construction, but cheap and good
//! enough to steer the aligner's penalties.

use serde::{Deserialize, Serialize};

use stitchkit_core::{DistanceMatrix, Ring};

use crate::error::{PatternError, PatternResult};

/// Shape classification of one source-ring point relative to the adjacent
/// target ring.
///
/// A point is never both a bulge and an indent; the variant makes that
/// illegal state unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeClass {
    /// The point sits locally closer to the centroid than its neighborhood
    /// on the adjacent ring; the surface bulges outward between the rings.
    Bulge,
    /// The point sits locally farther out than its neighborhood on the
    /// adjacent ring; the surface dips inward.
    Indent,
    /// No consistent local trend.
    Neither,
}

impl ShapeClass {
    pub fn is_bulge(self) -> bool {
        self == ShapeClass::Bulge
    }

    pub fn is_indent(self) -> bool {
        self == ShapeClass::Indent
    }
}

/// Classifies every point of `source` against the adjacent `target` ring.
///
/// For each source point: find its `neighbor_count` nearest points on the
/// target ring through the distance matrix, then compare each neighbor's
/// distance to the source ring's centroid with the point's own distance.
/// All neighbors strictly farther out means bulge; all strictly closer
/// means indent; anything mixed means neither.
///
/// The classification depends on which ring the source is paired with, so
/// it is recomputed per ring pair. Fails when the target ring has fewer
/// points than `neighbor_count`.
pub fn classify(
    source: &Ring,
    target: &Ring,
    dist: &DistanceMatrix,
    neighbor_count: usize,
) -> PatternResult<Vec<ShapeClass>> {
    if target.len() < neighbor_count {
        return Err(PatternError::ClassificationUnavailable {
            have: target.len(),
            need: neighbor_count,
        });
    }

    let center = source.centroid();
    let target_points = target.points();
    let labels = source
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let own = point.distance(&center);
            let neighbors = dist.nearest_in_row(i, neighbor_count);
            let farther = neighbors
                .iter()
                .all(|&j| target_points[j].distance(&center) > own);
            let closer = neighbors
                .iter()
                .all(|&j| target_points[j].distance(&center) < own);
            if farther {
                ShapeClass::Bulge
            } else if closer {
                ShapeClass::Indent
            } else {
                ShapeClass::Neither
            }
        })
        .collect();
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stitchkit_core::Point;

    fn circle(n: usize, radius: f64, z: f64) -> Ring {
        let points = (0..n)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
                Point::new(radius * theta.cos(), radius * theta.sin(), z)
            })
            .collect();
        Ring::new(points).unwrap()
    }

    fn classify_pair(a: &Ring, b: &Ring) -> Vec<ShapeClass> {
        let dist = DistanceMatrix::build(a.points(), b.points());
        classify(a, b, &dist, 3).unwrap()
    }

    #[test]
    fn test_wider_neighbor_ring_flags_bulges() {
        // Every neighbor on the larger coplanar ring is farther from the
        // source centroid than the source point itself.
        let a = circle(8, 1.0, 0.0);
        let b = circle(8, 2.0, 0.0);
        let labels = classify_pair(&a, &b);
        assert!(labels.iter().all(|s| s.is_bulge()));
    }

    #[test]
    fn test_narrower_neighbor_ring_flags_indents() {
        let a = circle(8, 1.0, 0.0);
        let b = circle(8, 0.5, 0.0);
        let labels = classify_pair(&a, &b);
        assert!(labels.iter().all(|s| s.is_indent()));
    }

    #[test]
    fn test_identical_ring_is_neither() {
        // Equal radii put the neighbors at exactly the point's own centroid
        // distance; the strict comparisons yield Neither.
        let a = circle(8, 1.0, 0.0);
        let b = circle(8, 1.0, 0.0);
        let labels = classify_pair(&a, &b);
        assert!(labels.iter().all(|s| *s == ShapeClass::Neither));
    }

    #[test]
    fn test_mixed_neighborhood_is_neither() {
        // Target ring crosses the source radius, so each source point sees
        // neighbors on both sides.
        let a = circle(6, 1.0, 0.0);
        let b = Ring::new(
            (0..12)
                .map(|i| {
                    let theta = 2.0 * std::f64::consts::PI * (i as f64) / 12.0;
                    let r = if i % 2 == 0 { 0.8 } else { 1.2 };
                    Point::new(r * theta.cos(), r * theta.sin(), 0.0)
                })
                .collect(),
        )
        .unwrap();
        let dist = DistanceMatrix::build(a.points(), b.points());
        let labels = classify(&a, &b, &dist, 3).unwrap();
        assert!(labels.contains(&ShapeClass::Neither));
    }

    #[test]
    fn test_small_neighbor_ring_fails() {
        let a = circle(8, 1.0, 0.0);
        let b = circle(8, 1.0, 0.0);
        let dist = DistanceMatrix::build(a.points(), b.points());
        let err = classify(&a, &b, &dist, 9).unwrap_err();
        assert!(matches!(
            err,
            PatternError::ClassificationUnavailable { have: 8, need: 9 }
        ));
    }
}
