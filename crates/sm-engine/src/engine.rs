use std::fmt::Debug;

use crate::error::{EngineError, Result};

/// Trait for pluggable matrix-multiply engines (reference, blocked, systolic).
///
/// All operations work on flat row-major `i32` slices. Data is passed in as
/// slices and returned as an owned output buffer. Each engine must produce
/// the exact integer product; engines differ only in how the sum is
/// scheduled.
pub trait MatmulEngine: Send + Sync + Debug {
    /// Returns the name of this engine (e.g., "reference", "systolic").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: row-major data of shape [m, k]
    /// - `b`: row-major data of shape [k, n]
    /// - Returns: row-major data of shape [m, n]
    ///
    /// Fails fast with [`EngineError::BufferLength`] if a slice is shorter
    /// or longer than its dimensions imply.
    fn multiply(&self, a: &[i32], b: &[i32], m: usize, k: usize, n: usize) -> Result<Vec<i32>>;
}

/// Checks that both operand slices match the lengths their dimensions imply.
///
/// Shared by every engine so a malformed buffer is rejected before any
/// element is read.
pub(crate) fn check_operands(a: &[i32], b: &[i32], m: usize, k: usize, n: usize) -> Result<()> {
    if a.len() != m * k {
        return Err(EngineError::BufferLength {
            name: "a",
            rows: m,
            cols: k,
            got: a.len(),
            expected: m * k,
        });
    }
    if b.len() != k * n {
        return Err(EngineError::BufferLength {
            name: "b",
            rows: k,
            cols: n,
            got: b.len(),
            expected: k * n,
        });
    }
    Ok(())
}

/// Checks the output slice the same way.
pub(crate) fn check_output(c: &[i32], m: usize, n: usize) -> Result<()> {
    if c.len() != m * n {
        return Err(EngineError::BufferLength {
            name: "c",
            rows: m,
            cols: n,
            got: c.len(),
            expected: m * n,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_operands_ok() {
        let a = vec![0; 6];
        let b = vec![0; 12];
        assert!(check_operands(&a, &b, 2, 3, 4).is_ok());
    }

    #[test]
    fn test_check_operands_short_a() {
        let a = vec![0; 5];
        let b = vec![0; 12];
        let err = check_operands(&a, &b, 2, 3, 4).unwrap_err();
        match err {
            EngineError::BufferLength { name, expected, got, .. } => {
                assert_eq!(name, "a");
                assert_eq!(expected, 6);
                assert_eq!(got, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_output_mismatch() {
        let c = vec![0; 7];
        assert!(check_output(&c, 2, 4).is_err());
    }
}
