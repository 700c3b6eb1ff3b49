//! `sm-engine` - Tiled systolic-array matrix multiplication for `i32`
//! matrices.
//!
//! This crate provides:
//! - A `Matrix` type over flat row-major storage
//! - A `MatmulEngine` trait for pluggable multiply implementations
//! - A `SystolicEngine` that simulates the wave-stepped T x T
//!   processing-element grid bit-for-bit (skewed injection, neighbor
//!   propagation, persistent per-tile accumulators)
//! - A `BlockedEngine` computing the same tiled sum with a direct loop
//! - A `ReferenceEngine` triple-loop oracle
//! - Flat-buffer entry points, single- and multi-threaded
//!
//! All engines produce exact, bit-identical integer results; dimensions
//! need not be multiples of the tile size (boundary tiles are clipped and
//! zero-padded).
//!
//! ## Usage
//!
//! ```
//! use sm_engine::multiply;
//!
//! let a = vec![1, 2, 3, 4]; // 2x2
//! let b = vec![5, 6, 7, 8]; // 2x2
//! let mut c = vec![0i32; 4];
//!
//! multiply(&a, &b, &mut c, 2, 2, 2).unwrap();
//! assert_eq!(c, vec![19, 22, 43, 50]);
//! ```

pub mod blocked;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod reference;
pub mod schedule;
pub mod systolic;
pub mod threaded;
pub mod tile;

// Re-export primary types at the crate root for convenience.
pub use blocked::BlockedEngine;
pub use engine::MatmulEngine;
pub use error::{EngineError, Result};
pub use matrix::Matrix;
pub use reference::ReferenceEngine;
pub use systolic::SystolicEngine;
pub use threaded::multiply_parallel;
pub use tile::DEFAULT_TILE;

use blocked::DirectKernel;
use engine::{check_operands, check_output};
use schedule::run_tiles;

/// Matrix multiply into a caller-provided buffer: C = A @ B.
///
/// `a` is `a_rows` x `a_cols`, `b` is `a_cols` x `b_cols`, `c` is
/// `a_rows` x `b_cols`, all row-major. Uses the blocked engine at
/// [`DEFAULT_TILE`]; every element of `c` is overwritten.
///
/// Fails fast if any slice length does not match its dimensions.
pub fn multiply(
    a: &[i32],
    b: &[i32],
    c: &mut [i32],
    a_rows: usize,
    a_cols: usize,
    b_cols: usize,
) -> Result<()> {
    check_operands(a, b, a_rows, a_cols, b_cols)?;
    check_output(c, a_rows, b_cols)?;
    run_tiles::<DEFAULT_TILE, _>(&mut DirectKernel, a, b, c, a_rows, a_cols, b_cols);
    Ok(())
}
