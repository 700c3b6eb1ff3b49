use crate::engine::{check_operands, MatmulEngine};
use crate::error::Result;

/// Direct triple-loop engine.
///
/// Computes every output element as an explicit dot product, with no tiling
/// and no staging. Intended as the correctness oracle the tiled engines are
/// compared against, and as a fallback where tiling buys nothing.
#[derive(Debug, Clone)]
pub struct ReferenceEngine;

impl ReferenceEngine {
    pub fn new() -> Self {
        ReferenceEngine
    }
}

impl Default for ReferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatmulEngine for ReferenceEngine {
    fn name(&self) -> &str {
        "reference"
    }

    fn multiply(&self, a: &[i32], b: &[i32], m: usize, k: usize, n: usize) -> Result<Vec<i32>> {
        check_operands(a, b, m, k, n)?;
        let mut c = vec![0i32; m * n];
        for i in 0..m {
            for j in 0..n {
                let mut sum = 0i32;
                for p in 0..k {
                    sum += a[i * k + p] * b[p * n + j];
                }
                c[i * n + j] = sum;
            }
        }
        Ok(c)
    }
}
