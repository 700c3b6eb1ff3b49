//! Multi-threaded multiplication over disjoint output row bands.
//!
//! Output tiles have no data dependency on each other, so the rows of C can
//! be partitioned across workers. Each worker runs the full tile schedule on
//! its band of A and C with private tile buffers; B is shared read-only. The
//! bands are disjoint `chunks_mut` regions, so no locking is needed.

use std::thread;

use crate::blocked::DirectKernel;
use crate::engine::{check_operands, check_output};
use crate::error::Result;
use crate::schedule::run_tiles;
use crate::tile::DEFAULT_TILE;

/// Same result as [`crate::multiply`], computed on up to `num_threads`
/// threads.
///
/// Thread count adapts to the problem size: small products run on a single
/// thread because spawn overhead outweighs the work.
pub fn multiply_parallel(
    a: &[i32],
    b: &[i32],
    c: &mut [i32],
    a_rows: usize,
    a_cols: usize,
    b_cols: usize,
    num_threads: usize,
) -> Result<()> {
    let (m, k, n) = (a_rows, a_cols, b_cols);
    check_operands(a, b, m, k, n)?;
    check_output(c, m, n)?;

    let threads = choose_thread_count(m, k, n, num_threads);
    if threads <= 1 {
        run_tiles::<DEFAULT_TILE, _>(&mut DirectKernel, a, b, c, m, k, n);
        return Ok(());
    }

    let rows_per_band = m.div_ceil(threads);
    thread::scope(|s| {
        for (a_band, c_band) in a
            .chunks(rows_per_band * k)
            .zip(c.chunks_mut(rows_per_band * n))
        {
            s.spawn(move || {
                let band_rows = c_band.len() / n;
                run_tiles::<DEFAULT_TILE, _>(&mut DirectKernel, a_band, b, c_band, band_rows, k, n);
            });
        }
    });
    Ok(())
}

/// Picks how many threads are worth spawning for an m*k*n multiply-add
/// count, capped at `max_threads` and at one band per row.
fn choose_thread_count(m: usize, k: usize, n: usize, max_threads: usize) -> usize {
    const SINGLE_THREAD_MACS: usize = 1 << 20;
    const TWO_THREAD_MACS: usize = 1 << 23;

    let macs = m.saturating_mul(k).saturating_mul(n);
    let wanted = if macs < SINGLE_THREAD_MACS {
        1
    } else if macs < TWO_THREAD_MACS {
        2
    } else {
        max_threads
    };
    wanted.clamp(1, max_threads.max(1)).min(m.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatmulEngine;
    use crate::reference::ReferenceEngine;

    #[test]
    fn test_small_matrix_single_thread_path() {
        let a = vec![1, 2, 3, 4, 5, 6];
        let b = vec![7, 8, 9, 10, 11, 12];
        let mut c = vec![0i32; 4];
        multiply_parallel(&a, &b, &mut c, 2, 3, 2, 4).unwrap();
        assert_eq!(c, vec![58, 64, 139, 154]);
    }

    #[test]
    fn test_matches_reference_on_large_matrix() {
        let size = 128;
        let a: Vec<i32> = (0..size * size).map(|i| (i % 17) as i32 - 8).collect();
        let b: Vec<i32> = (0..size * size).map(|i| (i % 13) as i32 - 6).collect();

        let expected = ReferenceEngine::new()
            .multiply(&a, &b, size, size, size)
            .unwrap();

        let mut c = vec![0i32; size * size];
        multiply_parallel(&a, &b, &mut c, size, size, size, 4).unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn test_rejects_bad_output_length() {
        let a = vec![1, 2, 3, 4];
        let b = vec![1, 2, 3, 4];
        let mut c = vec![0i32; 3];
        assert!(multiply_parallel(&a, &b, &mut c, 2, 2, 2, 2).is_err());
    }

    #[test]
    fn test_choose_thread_count() {
        assert_eq!(choose_thread_count(8, 8, 8, 4), 1);
        assert_eq!(choose_thread_count(128, 128, 128, 4), 2);
        assert_eq!(choose_thread_count(1024, 1024, 1024, 4), 4);
        // Never more bands than rows.
        assert_eq!(choose_thread_count(2, 4096, 4096, 8), 2);
    }
}
