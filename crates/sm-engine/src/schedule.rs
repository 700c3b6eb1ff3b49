//! Tile scheduler: the loop nest that drives a tile kernel over an entire
//! matrix product.
//!
//! Output tiles are enumerated in row-major order; for each output tile the
//! reduction dimension is walked in `T`-wide steps, staging one A-tile and
//! one B-tile per step and accumulating into a single C-tile that lives for
//! exactly one reduction loop.

use crate::tile::{load_block, store_block, Block};

/// A kernel that folds one A-tile/B-tile pair into a C accumulator tile.
///
/// Implementations must compute `acc[i][j] += sum_p a[i][p] * b[p][j]` for
/// every cell; how the sum is ordered is up to the kernel. Kernels may keep
/// scratch state across calls (the systolic kernel keeps its operand
/// pipelines), hence `&mut self`.
pub trait TileKernel<const T: usize> {
    fn accumulate(&mut self, a: &Block<T>, b: &Block<T>, acc: &mut Block<T>);
}

/// Runs `kernel` over every tile of C = A @ B, writing the result into `c`.
///
/// A is `m` x `k`, B is `k` x `n`, C is `m` x `n`, all row-major. Dimensions
/// need not be multiples of `T`: boundary tiles are clipped by the loader
/// (zero-filled) and the writer (truncated). Local tile buffers are
/// allocated once and reused across all reduction steps; the accumulator is
/// zeroed once per output tile and flushed after its last reduction step.
///
/// Callers are responsible for validating slice lengths first.
pub fn run_tiles<const T: usize, K: TileKernel<T>>(
    kernel: &mut K,
    a: &[i32],
    b: &[i32],
    c: &mut [i32],
    m: usize,
    k: usize,
    n: usize,
) {
    assert!(T >= 1, "tile size must be at least 1");

    let mut a_block = [[0i32; T]; T];
    let mut b_block = [[0i32; T]; T];

    for i0 in (0..m).step_by(T) {
        for j0 in (0..n).step_by(T) {
            let mut acc = [[0i32; T]; T];
            for k0 in (0..k).step_by(T) {
                load_block(a, m, k, i0, k0, &mut a_block);
                load_block(b, k, n, k0, j0, &mut b_block);
                kernel.accumulate(&a_block, &b_block, &mut acc);
            }
            store_block(&acc, c, m, n, i0, j0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain per-tile triple loop, enough to exercise the scheduler alone.
    struct NaiveKernel;

    impl<const T: usize> TileKernel<T> for NaiveKernel {
        fn accumulate(&mut self, a: &Block<T>, b: &Block<T>, acc: &mut Block<T>) {
            for i in 0..T {
                for j in 0..T {
                    for p in 0..T {
                        acc[i][j] += a[i][p] * b[p][j];
                    }
                }
            }
        }
    }

    fn naive(a: &[i32], b: &[i32], m: usize, k: usize, n: usize) -> Vec<i32> {
        let mut c = vec![0i32; m * n];
        for i in 0..m {
            for j in 0..n {
                for p in 0..k {
                    c[i * n + j] += a[i * k + p] * b[p * n + j];
                }
            }
        }
        c
    }

    #[test]
    fn test_exact_multiple_two_tiles_per_side() {
        let a: Vec<i32> = (0..16).collect();
        let b: Vec<i32> = (0..16).rev().collect();
        let mut c = vec![0i32; 16];
        run_tiles::<2, _>(&mut NaiveKernel, &a, &b, &mut c, 4, 4, 4);
        assert_eq!(c, naive(&a, &b, 4, 4, 4));
    }

    #[test]
    fn test_non_multiple_dimensions() {
        let a: Vec<i32> = (0..15).collect(); // 3x5
        let b: Vec<i32> = (0..35).collect(); // 5x7
        let mut c = vec![0i32; 21];
        run_tiles::<2, _>(&mut NaiveKernel, &a, &b, &mut c, 3, 5, 7);
        assert_eq!(c, naive(&a, &b, 3, 5, 7));
    }

    #[test]
    fn test_accumulator_spans_reduction_steps() {
        // k = 4 with T = 2 takes two reduction steps per output tile; the
        // result is only correct if the accumulator persists across them.
        let a: Vec<i32> = (1..=8).collect(); // 2x4
        let b: Vec<i32> = (1..=8).collect(); // 4x2
        let mut c = vec![0i32; 4];
        run_tiles::<2, _>(&mut NaiveKernel, &a, &b, &mut c, 2, 4, 2);
        assert_eq!(c, vec![50, 60, 114, 140]);
    }

    #[test]
    fn test_empty_reduction_gives_zero() {
        let mut c = vec![9i32; 4];
        run_tiles::<2, _>(&mut NaiveKernel, &[], &[], &mut c, 2, 0, 2);
        assert_eq!(c, vec![0, 0, 0, 0]);
    }
}
