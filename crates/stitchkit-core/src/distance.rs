//! Pairwise distance matrices between contour rings.

use std::ops::Index;

use crate::point::Point;

/// Dense row-major matrix of pairwise Euclidean distances between a source
/// point set (rows) and a target point set (columns).
///
/// Derived data, never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes the full distance matrix between two point sets.
    ///
    /// Empty inputs produce an empty matrix.
    pub fn build(source: &[Point], target: &[Point]) -> Self {
        let rows = source.len();
        let cols = target.len();
        let mut data = Vec::with_capacity(rows * cols);
        for a in source {
            for b in target {
                data.push(a.distance(b));
            }
        }
        Self { rows, cols, data }
    }

    /// Builds a matrix from explicit row data.
    ///
    /// # Panics
    ///
    /// Panics if the rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        let m = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == m),
            "distance matrix rows must have equal lengths"
        );
        Self {
            rows: n,
            cols: m,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of source points.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of target points.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The distance between source point `i` and target point `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    /// Column indices of the `k` nearest target points to source point `i`,
    /// closest first. Distance ties resolve to the lower column index.
    ///
    /// Returns fewer than `k` indices when the target set is smaller.
    pub fn nearest_in_row(&self, i: usize, k: usize) -> Vec<usize> {
        let row = &self.data[i * self.cols..(i + 1) * self.cols];
        let mut order: Vec<usize> = (0..self.cols).collect();
        order.sort_by(|&a, &b| row[a].total_cmp(&row[b]));
        order.truncate(k);
        order
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}
