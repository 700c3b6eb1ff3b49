use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("operand {name} has {got} elements but {rows}x{cols} requires {expected}")]
    BufferLength {
        name: &'static str,
        rows: usize,
        cols: usize,
        got: usize,
        expected: usize,
    },
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimensionMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
