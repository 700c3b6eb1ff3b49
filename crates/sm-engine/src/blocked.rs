//! Blocked engine: the same tile schedule as the systolic engine, but each
//! tile pair is folded with a plain triple loop instead of the wave
//! pipeline.
//!
//! Integer multiply-add is associative and commutative, so reordering the
//! per-tile sum this way produces bit-identical results to the wave
//! schedule. This is the default engine; the wave simulation only earns its
//! overhead when the hardware propagation order itself is under test.

use crate::engine::{check_operands, MatmulEngine};
use crate::error::Result;
use crate::schedule::{run_tiles, TileKernel};
use crate::tile::Block;

/// Tile kernel that accumulates one tile pair with a direct i/j/p loop.
#[derive(Debug, Default)]
pub struct DirectKernel;

impl<const T: usize> TileKernel<T> for DirectKernel {
    fn accumulate(&mut self, a: &Block<T>, b: &Block<T>, acc: &mut Block<T>) {
        for i in 0..T {
            for p in 0..T {
                let av = a[i][p];
                for j in 0..T {
                    acc[i][j] += av * b[p][j];
                }
            }
        }
    }
}

/// Matrix-multiply engine using tiled direct accumulation.
#[derive(Debug, Clone)]
pub struct BlockedEngine<const T: usize = 8>;

impl<const T: usize> BlockedEngine<T> {
    pub fn new() -> Self {
        BlockedEngine
    }
}

impl<const T: usize> Default for BlockedEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const T: usize> MatmulEngine for BlockedEngine<T> {
    fn name(&self) -> &str {
        "blocked"
    }

    fn multiply(&self, a: &[i32], b: &[i32], m: usize, k: usize, n: usize) -> Result<Vec<i32>> {
        check_operands(a, b, m, k, n)?;
        let mut c = vec![0i32; m * n];
        run_tiles::<T, _>(&mut DirectKernel, a, b, &mut c, m, k, n);
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_basic() {
        let engine = BlockedEngine::<2>::new();
        let c = engine
            .multiply(&[1, 2, 3, 4], &[5, 6, 7, 8], 2, 2, 2)
            .unwrap();
        assert_eq!(c, vec![19, 22, 43, 50]);
    }

    #[test]
    fn test_multiply_identity() {
        let engine = BlockedEngine::<2>::new();
        let a: Vec<i32> = (1..=9).collect();
        let b = vec![1, 0, 0, 0, 1, 0, 0, 0, 1];
        let c = engine.multiply(&a, &b, 3, 3, 3).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_multiply_zero_matrix() {
        let engine = BlockedEngine::<2>::new();
        let a = vec![0i32; 6];
        let b: Vec<i32> = (0..8).collect();
        let c = engine.multiply(&a, &b, 3, 2, 4).unwrap();
        assert_eq!(c, vec![0i32; 12]);
    }

    #[test]
    fn test_multiply_rejects_short_buffer() {
        let engine = BlockedEngine::<2>::new();
        assert!(engine.multiply(&[1, 2, 3, 4], &[1, 2, 3], 2, 2, 2).is_err());
    }
}
