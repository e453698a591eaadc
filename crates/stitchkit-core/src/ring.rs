//! Closed contour rings.
//!
//! A ring is an ordered sequence of points forming a closed loop: the last
//! point connects back to the first. Rings are immutable once built and are
//! the unit of work for the whole pattern pipeline.

use crate::error::{GeometryError, GeometryResult};
use crate::point::{centroid, Point};

/// An ordered closed sequence of contour points.
///
/// Constructed only through [`Ring::new`] and [`Ring::from_unordered`],
/// which enforce the minimum point count.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Minimum number of points for a meaningful closed ring.
    pub const MIN_POINTS: usize = 3;

    /// Builds a ring from points already in traversal order.
    pub fn new(points: Vec<Point>) -> GeometryResult<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(GeometryError::TooFewPoints {
                needed: Self::MIN_POINTS,
                got: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Builds a ring from an unordered point set by sorting the points by
    /// polar angle around their centroid.
    ///
    /// This recovers a traversal order for boundary points extracted without
    /// connectivity information. It is only reliable when the point set is
    /// star-shaped around its centroid in the xy projection; heavily
    /// non-convex contours may come out mis-ordered. Ties in angle keep
    /// their input order.
    pub fn from_unordered(mut points: Vec<Point>) -> GeometryResult<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(GeometryError::TooFewPoints {
                needed: Self::MIN_POINTS,
                got: points.len(),
            });
        }
        let center = centroid(&points).unwrap_or(Point::new(0.0, 0.0, 0.0));
        points.sort_by(|a, b| {
            let ta = (a.y - center.y).atan2(a.x - center.x);
            let tb = (b.y - center.y).atan2(b.x - center.x);
            ta.total_cmp(&tb)
        });
        Ok(Self { points })
    }

    /// Number of points on the ring.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A ring can never be empty; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in traversal order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Geometric centroid of the ring's points.
    pub fn centroid(&self) -> Point {
        // Constructors guarantee at least MIN_POINTS.
        centroid(&self.points).unwrap_or(Point::new(0.0, 0.0, 0.0))
    }

    /// Total arc length around the loop, including the closing segment.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].distance(&self.points[(i + 1) % n]))
            .sum()
    }

    /// Cumulative arc lengths along the loop.
    ///
    /// Returns `n + 1` values: entry `i` is the arc length from point 0 to
    /// point `i`, and the final entry is the full perimeter (the closing
    /// segment from the last point back to point 0 included).
    pub fn arc_lengths(&self) -> Vec<f64> {
        let n = self.points.len();
        let mut lengths = Vec::with_capacity(n + 1);
        let mut total = 0.0;
        lengths.push(0.0);
        for i in 0..n {
            let next = &self.points[(i + 1) % n];
            total += self.points[i].distance(next);
            lengths.push(total);
        }
        lengths
    }

    /// Consumes the ring and returns its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_new_rejects_short_rings() {
        let err = Ring::new(square()[..2].to_vec()).unwrap_err();
        assert_eq!(err, GeometryError::TooFewPoints { needed: 3, got: 2 });
    }

    #[test]
    fn test_perimeter_includes_closing_segment() {
        let ring = Ring::new(square()).unwrap();
        assert!((ring.perimeter() - 4.0).abs() < 1e-12);

        let lengths = ring.arc_lengths();
        assert_eq!(lengths.len(), 5);
        assert_eq!(lengths[0], 0.0);
        assert!((lengths[4] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_unordered_recovers_traversal_order() {
        // Shuffled square corners come back in angular order around (0.5, 0.5).
        let shuffled = vec![
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
        ];
        let ring = Ring::from_unordered(shuffled).unwrap();
        // Angles around the centroid: (0,0) = -135deg, (1,0) = -45deg,
        // (1,1) = 45deg, (0,1) = 135deg.
        assert_eq!(
            ring.points(),
            &[
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_from_unordered_ties_keep_input_order() {
        // Two coincident points have equal angles; stable sort keeps them
        // in the order supplied.
        let pts = vec![
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(-1.0, 1.0, 0.0),
            Point::new(-1.0, -1.0, 0.0),
        ];
        let ring = Ring::from_unordered(pts).unwrap();
        let zs: Vec<f64> = ring
            .points()
            .iter()
            .filter(|p| p.x == 1.0)
            .map(|p| p.z)
            .collect();
        assert_eq!(zs, vec![0.0, 1.0]);
    }

    #[test]
    fn test_centroid() {
        let ring = Ring::new(square()).unwrap();
        assert_eq!(ring.centroid(), Point::new(0.5, 0.5, 0.0));
    }
}
