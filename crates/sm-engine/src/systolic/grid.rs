//! The T x T grid of multiply-accumulate processing elements.
//!
//! Each cell (i, j) owns one accumulator and two operand registers. On a
//! wave step, cell (i, 0) takes a fresh A operand from the skewed A-tile and
//! every other cell takes its left neighbor's A register from the previous
//! wave; B operands flow the same way from the top. The cell then performs
//! one multiply-accumulate. After all waves for a tile pair, every
//! accumulator holds its tile-local dot product, equal to the direct triple
//! loop but computed as a diagonally staggered pipeline.

use crate::systolic::skew::{SkewedA, SkewedB};
use crate::tile::Block;

/// Operand pipeline state for a `T` x `T` processing-element grid.
///
/// The accumulators themselves live in the caller's C-tile so that they can
/// persist across reduction steps; the grid only keeps the propagation
/// registers between waves.
#[derive(Debug)]
pub struct PeGrid<const T: usize> {
    buf_a: Block<T>,
    buf_b: Block<T>,
}

impl<const T: usize> PeGrid<T> {
    pub fn new() -> Self {
        assert!(T >= 1, "tile size must be at least 1");
        PeGrid {
            buf_a: [[0; T]; T],
            buf_b: [[0; T]; T],
        }
    }

    /// Streams one skewed tile pair through the grid, accumulating into
    /// `acc`.
    ///
    /// Runs waves w = 3T-2 down to 0. For w >= T the injection tap is shift
    /// position w - T; below that the pipeline drains with zero operands.
    /// There is no diagonal gating: cells outside their active window
    /// multiply a zero from the skew padding, which leaves `acc` unchanged.
    pub fn pump(&mut self, a: &SkewedA<T>, b: &SkewedB<T>, acc: &mut Block<T>) {
        // Start from drained pipelines so the first waves propagate zeros,
        // not operands left over from the previous tile pair.
        self.buf_a = [[0; T]; T];
        self.buf_b = [[0; T]; T];

        for w in (0..=3 * T - 2).rev() {
            // Descending i and j: each cell reads its upper/left neighbor
            // before that neighbor is overwritten, so the in-place update
            // sees previous-wave values exactly like the lockstep hardware.
            for i in (0..T).rev() {
                for j in (0..T).rev() {
                    let inject_a = if w >= T { a.tap(i, w - T) } else { 0 };
                    let inject_b = if w >= T { b.tap(w - T, j) } else { 0 };
                    self.buf_a[i][j] = if j > 0 { self.buf_a[i][j - 1] } else { inject_a };
                    self.buf_b[i][j] = if i > 0 { self.buf_b[i - 1][j] } else { inject_b };
                    acc[i][j] += self.buf_a[i][j] * self.buf_b[i][j];
                }
            }
        }
    }
}

impl<const T: usize> Default for PeGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}
