//! Uniform arc-length resampling of contour rings.

use tracing::trace;

use crate::error::{GeometryError, GeometryResult};
use crate::point::Point;
use crate::ring::Ring;

/// Resamples a ring at a uniform arc-length spacing.
///
/// The output ring has `m = floor(perimeter / spacing)` points spaced
/// exactly `perimeter / m` apart along the original polyline, preserving its
/// shape. The first output point coincides with the ring's first point.
///
/// Fails when `spacing` is not positive, when the ring's perimeter is zero
/// (all points coincident), or when the spacing is too coarse to leave at
/// least [`Ring::MIN_POINTS`] output points.
pub fn resample(ring: &Ring, spacing: f64) -> GeometryResult<Ring> {
    if spacing <= 0.0 {
        return Err(GeometryError::NonPositiveParameter {
            name: "spacing",
            value: spacing,
        });
    }

    let distances = ring.arc_lengths();
    let perimeter = *distances.last().unwrap_or(&0.0);
    if perimeter <= 0.0 {
        return Err(GeometryError::ZeroPerimeter);
    }

    let m = (perimeter / spacing).floor() as usize;
    if m < Ring::MIN_POINTS {
        return Err(GeometryError::SpacingTooCoarse {
            spacing,
            perimeter,
            points: m,
            needed: Ring::MIN_POINTS,
        });
    }
    trace!(perimeter, spacing, points = m, "resampling ring");

    let points = ring.points();
    let n = points.len();
    let mut resampled = Vec::with_capacity(m);
    // Targets are strictly increasing, so the segment cursor only moves
    // forward. The half-open interval [distances[i], distances[i+1]) keeps a
    // target that lands exactly on a segment boundary in the later segment
    // without ever skipping one.
    let mut seg = 0;
    for k in 0..m {
        let target = (k as f64 / m as f64) * perimeter;
        while seg < n - 1 && distances[seg + 1] <= target {
            seg += 1;
        }
        let seg_len = distances[seg + 1] - distances[seg];
        let next = &points[(seg + 1) % n];
        if seg_len > 0.0 {
            let t = (target - distances[seg]) / seg_len;
            resampled.push(points[seg].lerp(next, t));
        } else {
            // Zero-length segment between duplicate points.
            resampled.push(points[seg]);
        }
    }

    Ring::new(resampled)
}
