//! Fixed-size tile storage and the loader/writer that move tiles between
//! flat matrices and local buffers.
//!
//! A tile is a `T`x`T` window of a matrix addressed by its top-left offset.
//! Tiles that overrun the matrix edge are clipped: the loader zero-fills the
//! uncovered cells (an uninitialized cell would corrupt the following
//! multiply-accumulate) and the writer stores only the covered extent.

/// Tile size used by the default engines and the flat-buffer entry points.
///
/// Matches the array dimension of the hardware design this engine mirrors.
pub const DEFAULT_TILE: usize = 8;

/// A `T`x`T` block of matrix elements, the unit of local computation.
pub type Block<const T: usize> = [[i32; T]; T];

/// Copies the window `src[row0..row0+T, col0..col0+T]` into `block`.
///
/// `src` is row-major with `rows` x `cols` elements. Cells of the window
/// that fall outside the matrix are set to zero, so a partially covered
/// boundary tile still produces exact partial sums.
pub fn load_block<const T: usize>(
    src: &[i32],
    rows: usize,
    cols: usize,
    row0: usize,
    col0: usize,
    block: &mut Block<T>,
) {
    for r in 0..T {
        for c in 0..T {
            block[r][c] = if row0 + r < rows && col0 + c < cols {
                src[(row0 + r) * cols + col0 + c]
            } else {
                0
            };
        }
    }
}

/// Writes the accumulated tile back to `dst[row0.., col0..]`, clipped to the
/// matrix bounds.
///
/// No zero-fill: the accumulator already holds the correct values for the
/// covered region, and cells past the edge do not exist in `dst`.
pub fn store_block<const T: usize>(
    block: &Block<T>,
    dst: &mut [i32],
    rows: usize,
    cols: usize,
    row0: usize,
    col0: usize,
) {
    let h = T.min(rows - row0);
    let w = T.min(cols - col0);
    for r in 0..h {
        for c in 0..w {
            dst[(row0 + r) * cols + col0 + c] = block[r][c];
        }
    }
}
