//! Wave-stepped systolic engine.
//!
//! Reproduces the data movement of a T x T hardware systolic array
//! bit-for-bit: tiles are diagonally skewed at load time, then streamed
//! through the processing-element grid one wave at a time. Numerically it is
//! identical to [`BlockedEngine`](crate::blocked::BlockedEngine); use this
//! engine when validating against a hardware-equivalent reference.

pub mod grid;
pub mod skew;

use crate::engine::{check_operands, MatmulEngine};
use crate::error::Result;
use crate::schedule::{run_tiles, TileKernel};
use crate::systolic::grid::PeGrid;
use crate::systolic::skew::{SkewedA, SkewedB};
use crate::tile::Block;

/// Tile kernel that skews each tile pair and pumps it through a PE grid.
#[derive(Debug)]
pub struct WaveKernel<const T: usize> {
    grid: PeGrid<T>,
    a_skew: SkewedA<T>,
    b_skew: SkewedB<T>,
}

impl<const T: usize> WaveKernel<T> {
    pub fn new() -> Self {
        WaveKernel {
            grid: PeGrid::new(),
            a_skew: SkewedA::new(),
            b_skew: SkewedB::new(),
        }
    }
}

impl<const T: usize> Default for WaveKernel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const T: usize> TileKernel<T> for WaveKernel<T> {
    fn accumulate(&mut self, a: &Block<T>, b: &Block<T>, acc: &mut Block<T>) {
        self.a_skew.load(a);
        self.b_skew.load(b);
        self.grid.pump(&self.a_skew, &self.b_skew, acc);
    }
}

/// Matrix-multiply engine that simulates the systolic wave schedule.
#[derive(Debug, Clone)]
pub struct SystolicEngine<const T: usize = 8>;

impl<const T: usize> SystolicEngine<T> {
    pub fn new() -> Self {
        SystolicEngine
    }
}

impl<const T: usize> Default for SystolicEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const T: usize> MatmulEngine for SystolicEngine<T> {
    fn name(&self) -> &str {
        "systolic"
    }

    fn multiply(&self, a: &[i32], b: &[i32], m: usize, k: usize, n: usize) -> Result<Vec<i32>> {
        check_operands(a, b, m, k, n)?;
        let mut c = vec![0i32; m * n];
        let mut kernel = WaveKernel::<T>::new();
        run_tiles::<T, _>(&mut kernel, a, b, &mut c, m, k, n);
        Ok(c)
    }
}
