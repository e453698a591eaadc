//! Contour point primitive.

use serde::{Deserialize, Serialize};

/// A point sampled from one contour slice, in model space.
///
/// Serializes as a bare `[x, y, z]` triple, matching the slice-file format
/// the slicing exporter writes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Returns this point shifted by `dz` along the z axis.
    pub fn lifted(&self, dz: f64) -> Self {
        Self::new(self.x, self.y, self.z + dz)
    }

    /// Linear interpolation between `self` and `other` at parameter `t`.
    pub fn lerp(&self, other: &Point, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }
}

impl From<[f64; 3]> for Point {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Point> for [f64; 3] {
    fn from(p: Point) -> Self {
        [p.x, p.y, p.z]
    }
}

/// Geometric centroid of a point set.
///
/// Returns `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy, sz) = points.iter().fold((0.0, 0.0, 0.0), |(x, y, z), p| {
        (x + p.x, y + p.y, z + p.z)
    });
    Some(Point::new(sx / n, sy / n, sz / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(3.0, 4.0, 0.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_lerp() {
        let a = Point::new(0.0, 0.0, 1.0);
        let b = Point::new(2.0, 4.0, 1.0);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid, Point::new(1.0, 2.0, 1.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_centroid() {
        let pts = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(2.0, 2.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        ];
        assert_eq!(centroid(&pts), Some(Point::new(1.0, 1.0, 0.0)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_serde_triple() {
        let p: Point = serde_json::from_str("[1.0, 2.5, -3.0]").unwrap();
        assert_eq!(p, Point::new(1.0, 2.5, -3.0));
        let s = serde_json::to_string(&p).unwrap();
        assert_eq!(s, "[1.0,2.5,-3.0]");
    }
}
