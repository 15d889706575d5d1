//! Horizontal reflection.

use ndarray::ArrayViewMut2;

use crate::pixel::Pixel;

/// Mirror every row in place: column `x` moves to `width - 1 - x`.
///
/// Pairs are swapped from the outside in, so no pixel is overwritten before
/// it has been read. Row order is unchanged. Applying it twice restores the
/// original image.
pub fn reflect(mut image: ArrayViewMut2<Pixel>) {
    for mut row in image.rows_mut() {
        let width = row.len();
        for x in 0..width / 2 {
            row.swap(x, width - 1 - x);
        }
    }
}
