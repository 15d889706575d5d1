//! Core utilities shared by the neighborhood filters.
//!
//! This module provides:
//! - 3x3 window iteration with bounds checking
//! - Staged (scratch buffer) evaluation of per-cell functions
//! - Rounding from wide intermediates back to a channel value

use ndarray::{ArrayView2, ArrayViewMut2};
use rayon::prelude::*;

use crate::pixel::Pixel;

/// Iterate the in-bounds cells of the 3x3 window centered on (y, x).
///
/// Yields `([ky, kx], [sy, sx])` where `[ky, kx]` is the position inside
/// the window (0..3 each, row-major) and `[sy, sx]` the image coordinate.
/// Cells outside `[0, height) x [0, width)` are skipped.
pub fn window_3x3(
    y: usize,
    x: usize,
    height: usize,
    width: usize,
) -> impl Iterator<Item = ([usize; 2], [usize; 2])> {
    (0..3usize)
        .flat_map(|ky| (0..3usize).map(move |kx| (ky, kx)))
        .filter_map(move |(ky, kx)| {
            let sy = (y + ky).checked_sub(1)?;
            let sx = (x + kx).checked_sub(1)?;
            (sy < height && sx < width).then_some(([ky, kx], [sy, sx]))
        })
}

/// Round a non-negative intermediate to the nearest channel value.
///
/// Halves round away from zero. Values above 255 saturate.
#[inline]
pub fn round_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Evaluate `cell` for every coordinate against the untouched input, then
/// write all results back at once.
///
/// Rows of the scratch buffer are filled in parallel with Rayon. Each cell
/// only reads the shared input view, so the result does not depend on
/// scheduling.
///
/// # Arguments
/// * `image` - Pixel grid, overwritten with the results
/// * `cell` - Computes the output pixel at `(y, x)` from the original grid
pub fn map_staged<F>(mut image: ArrayViewMut2<Pixel>, cell: F)
where
    F: Fn(&ArrayView2<Pixel>, usize, usize) -> Pixel + Sync,
{
    let (height, width) = image.dim();
    if height == 0 || width == 0 {
        return;
    }

    let mut scratch = vec![Pixel::default(); height * width];
    {
        let input = image.view();
        scratch
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, out) in row.iter_mut().enumerate() {
                    *out = cell(&input, y, x);
                }
            });
    }

    // iter_mut walks in logical row-major order, matching the scratch layout
    for (dst, src) in image.iter_mut().zip(scratch) {
        *dst = src;
    }
}
