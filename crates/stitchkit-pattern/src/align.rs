//! Row alignment: the dynamic program that connects one ring to the next.
//!
//! Given the distance matrix between a source ring A (n points) and a
//! target ring B (m points), the aligner picks, for every point, whether it
//! connects 1:1 (single), 1:2 (increase), or 2:1 (decrease), so that every
//! point of both rings is consumed exactly once and the total cost is
//! minimal. The cost of a connection is how far its span deviates from the
//! target stitch length, plus a penalty when an increase or decrease is not
//! justified by the shape classification.

use serde::{Deserialize, Serialize};
use tracing::trace;

use stitchkit_core::{DistanceMatrix, PatternParams};

use crate::error::{PatternError, PatternResult};
use crate::shape::ShapeClass;

/// The three stitch operation kinds, rendered with the usual crochet
/// mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StitchKind {
    /// Single crochet: one source point to one target point.
    Single,
    /// Increase: one source point to two target points.
    Increase,
    /// Decrease: two source points to one target point.
    Decrease,
}

impl StitchKind {
    /// The pattern mnemonic for this kind.
    pub fn mnemonic(self) -> &'static str {
        match self {
            StitchKind::Single => "sc",
            StitchKind::Increase => "inc",
            StitchKind::Decrease => "dec",
        }
    }
}

impl std::fmt::Display for StitchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl std::str::FromStr for StitchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sc" | "single" => Ok(StitchKind::Single),
            "inc" | "increase" => Ok(StitchKind::Increase),
            "dec" | "decrease" => Ok(StitchKind::Decrease),
            _ => Err(format!("Unknown stitch kind: {}", s)),
        }
    }
}

/// One connection in an alignment, carrying the exact point indices it
/// consumes on each ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// `a -> b`
    Single { a: usize, b: usize },
    /// `a -> b[0], b[1]`
    Increase { a: usize, b: [usize; 2] },
    /// `a[0], a[1] -> b`
    Decrease { a: [usize; 2], b: usize },
}

impl Operation {
    /// The operation's stitch kind.
    pub fn kind(&self) -> StitchKind {
        match self {
            Operation::Single { .. } => StitchKind::Single,
            Operation::Increase { .. } => StitchKind::Increase,
            Operation::Decrease { .. } => StitchKind::Decrease,
        }
    }

    /// Source-ring indices this operation consumes.
    pub fn source_indices(&self) -> Vec<usize> {
        match self {
            Operation::Single { a, .. } => vec![*a],
            Operation::Increase { a, .. } => vec![*a],
            Operation::Decrease { a, .. } => a.to_vec(),
        }
    }

    /// Target-ring indices this operation consumes.
    pub fn target_indices(&self) -> Vec<usize> {
        match self {
            Operation::Single { b, .. } => vec![*b],
            Operation::Increase { b, .. } => b.to_vec(),
            Operation::Decrease { b, .. } => vec![*b],
        }
    }
}

/// A complete minimum-cost alignment of one ring pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    /// The winning operation sequence, in stitch order.
    pub ops: Vec<Operation>,
    /// Its total cost.
    pub cost: f64,
}

impl Alignment {
    /// The operation kinds in stitch order.
    pub fn kinds(&self) -> Vec<StitchKind> {
        self.ops.iter().map(Operation::kind).collect()
    }
}

/// Computes the minimum-cost alignment between two rings.
///
/// `dist` is the n-by-m distance matrix between the rings, `shapes` the
/// per-point classification of the source ring (length n). The target
/// stitch length and the increase/decrease penalties come from `params`.
///
/// `table[i][j]` is the minimum cost of having consumed the first `i`
/// source and `j` target points; cells are filled row-major, which respects
/// the dependency on `(i-1, j-1)`, `(i-1, j-2)`, and `(i-2, j-1)`. Ties
/// between transitions break in declaration order - single, then increase,
/// then decrease - via strict comparison, so results are deterministic.
/// Each cell stores only the winning transition; the operation sequence is
/// rebuilt by one backward walk from `(n, m)`.
///
/// Fails with [`PatternError::NoAlignment`] when no combination of moves
/// consumes both rings exactly (for example one source point against three
/// target points).
pub fn align(
    dist: &DistanceMatrix,
    shapes: &[ShapeClass],
    params: &PatternParams,
) -> PatternResult<Alignment> {
    let n = dist.rows();
    let m = dist.cols();
    debug_assert_eq!(shapes.len(), n, "one shape label per source point");

    let width = params.stitch_width;
    let cols = m + 1;
    let idx = |i: usize, j: usize| i * cols + j;

    let mut table = vec![f64::INFINITY; (n + 1) * cols];
    let mut back: Vec<Option<StitchKind>> = vec![None; (n + 1) * cols];
    table[idx(0, 0)] = 0.0;

    for i in 1..=n {
        for j in 1..=m {
            let mut best = f64::INFINITY;
            let mut step = None;

            // Single: a[i-1] -> b[j-1].
            let cost = table[idx(i - 1, j - 1)] + (dist.get(i - 1, j - 1) - width).abs();
            if cost < best {
                best = cost;
                step = Some(StitchKind::Single);
            }

            // Increase: a[i-1] -> b[j-2], b[j-1].
            if j >= 2 {
                let avg = (dist.get(i - 1, j - 2) + dist.get(i - 1, j - 1)) / 2.0;
                let penalty = if shapes[i - 1].is_bulge() {
                    0.0
                } else {
                    params.increase_penalty
                };
                let cost = table[idx(i - 1, j - 2)] + (avg - width).abs() + penalty;
                if cost < best {
                    best = cost;
                    step = Some(StitchKind::Increase);
                }
            }

            // Decrease: a[i-2], a[i-1] -> b[j-1].
            if i >= 2 {
                let avg = (dist.get(i - 2, j - 1) + dist.get(i - 1, j - 1)) / 2.0;
                let penalty = if shapes[i - 1].is_indent() {
                    0.0
                } else {
                    params.decrease_penalty
                };
                let cost = table[idx(i - 2, j - 1)] + (avg - width).abs() + penalty;
                if cost < best {
                    best = cost;
                    step = Some(StitchKind::Decrease);
                }
            }

            table[idx(i, j)] = best;
            back[idx(i, j)] = step;
        }
    }

    let cost = table[idx(n, m)];
    if !cost.is_finite() {
        return Err(PatternError::NoAlignment {
            from_points: n,
            to_points: m,
        });
    }
    trace!(n, m, cost, "alignment complete");

    // Walk the backpointers from (n, m) and reverse.
    let mut ops = Vec::new();
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        match back[idx(i, j)] {
            Some(StitchKind::Single) => {
                ops.push(Operation::Single { a: i - 1, b: j - 1 });
                i -= 1;
                j -= 1;
            }
            Some(StitchKind::Increase) => {
                ops.push(Operation::Increase {
                    a: i - 1,
                    b: [j - 2, j - 1],
                });
                i -= 1;
                j -= 2;
            }
            Some(StitchKind::Decrease) => {
                ops.push(Operation::Decrease {
                    a: [i - 2, i - 1],
                    b: j - 1,
                });
                i -= 2;
                j -= 1;
            }
            None => {
                // A finite terminal cost guarantees an unbroken chain of
                // backpointers down to (0, 0).
                return Err(PatternError::NoAlignment {
                    from_points: n,
                    to_points: m,
                });
            }
        }
    }
    ops.reverse();

    Ok(Alignment { ops, cost })
}
