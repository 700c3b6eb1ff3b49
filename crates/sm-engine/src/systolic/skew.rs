//! Diagonal skew transform applied to tiles before they enter the PE grid.
//!
//! The grid injects one A operand per row and one B operand per column on
//! every wave step. Laying the tile out diagonally shifted means a single
//! shared wave index selects, for every row and column at once, exactly the
//! operand pair each cell must multiply on that wave. Lanes not covered by
//! the shifted tile stay zero; the grid relies on those zeros instead of
//! gating its injection window.

use crate::tile::Block;

/// A-tile staged for row-wise injection: `T` rows of `2T - 1` lanes, with
/// logical element (r, c) stored at lane `T - 1 - r + c`.
#[derive(Debug)]
pub struct SkewedA<const T: usize> {
    lanes: Vec<i32>,
}

impl<const T: usize> SkewedA<T> {
    const WIDTH: usize = 2 * T - 1;

    pub fn new() -> Self {
        assert!(T >= 1, "tile size must be at least 1");
        SkewedA {
            lanes: vec![0; T * Self::WIDTH],
        }
    }

    /// Restages the buffer from a raw tile, zeroing every uncovered lane.
    pub fn load(&mut self, block: &Block<T>) {
        self.lanes.fill(0);
        for r in 0..T {
            for c in 0..T {
                self.lanes[r * Self::WIDTH + (T - 1 - r + c)] = block[r][c];
            }
        }
    }

    /// Operand for `row` at shift-buffer position `lane` (0..2T-1).
    pub fn tap(&self, row: usize, lane: usize) -> i32 {
        self.lanes[row * Self::WIDTH + lane]
    }
}

impl<const T: usize> Default for SkewedA<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// B-tile staged for column-wise injection: `2T - 1` lanes of `T` columns,
/// with logical element (r, c) stored at lane `T - 1 - c + r`.
#[derive(Debug)]
pub struct SkewedB<const T: usize> {
    lanes: Vec<i32>,
}

impl<const T: usize> SkewedB<T> {
    const HEIGHT: usize = 2 * T - 1;

    pub fn new() -> Self {
        assert!(T >= 1, "tile size must be at least 1");
        SkewedB {
            lanes: vec![0; Self::HEIGHT * T],
        }
    }

    pub fn load(&mut self, block: &Block<T>) {
        self.lanes.fill(0);
        for r in 0..T {
            for c in 0..T {
                self.lanes[(T - 1 - c + r) * T + c] = block[r][c];
            }
        }
    }

    /// Operand for `col` at shift-buffer position `lane` (0..2T-1).
    pub fn tap(&self, lane: usize, col: usize) -> i32 {
        self.lanes[lane * T + col]
    }
}

impl<const T: usize> Default for SkewedB<T> {
    fn default() -> Self {
        Self::new()
    }
}
