//! Box blur over a 3x3 window.
//!
//! Each channel becomes the average of the cells around it. Cells outside
//! the image are excluded and the divisor shrinks with them: a corner
//! averages 4 cells, a border cell 6, an interior cell 9. Images only one
//! pixel tall or wide get even smaller windows.

use ndarray::{ArrayView2, ArrayViewMut2};

use super::core::{map_staged, round_channel, window_3x3};
use crate::pixel::Pixel;

/// Average of the in-bounds 3x3 neighborhood of (y, x), per channel.
///
/// # Arguments
/// * `input` - Original (unblurred) image
/// * `y`, `x` - Target cell
///
/// # Returns
/// The blurred pixel. Channel sums are accumulated in `u32`.
pub fn box_average(input: &ArrayView2<Pixel>, y: usize, x: usize) -> Pixel {
    let (height, width) = input.dim();
    let mut sums = [0u32; 3];
    let mut count = 0u32;

    for (_, [sy, sx]) in window_3x3(y, x, height, width) {
        for (sum, value) in sums.iter_mut().zip(input[[sy, sx]].channels()) {
            *sum += value as u32;
        }
        count += 1;
    }

    // The center cell is always in bounds, so count >= 1
    Pixel::from_channels(sums.map(|sum| round_channel(sum as f64 / count as f64)))
}

/// Blur an image in place with an edge-adaptive 3x3 box filter.
///
/// Results are staged in a scratch buffer, so no cell ever sees an
/// already-blurred neighbor.
pub fn blur(image: ArrayViewMut2<Pixel>) {
    map_staged(image, box_average);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    fn white_center_3x3() -> Array2<Pixel> {
        let mut img = Array2::<Pixel>::default((3, 3));
        img[[1, 1]] = Pixel::WHITE;
        img
    }

    #[test]
    fn test_blur_white_center() {
        let mut img = white_center_3x3();
        blur(img.view_mut());

        // 255 / 9 = 28.33
        assert_eq!(img[[1, 1]], Pixel::gray(28));
        // Corners see 4 cells: 255 / 4 = 63.75
        assert_eq!(img[[0, 0]], Pixel::gray(64));
        assert_eq!(img[[2, 2]], Pixel::gray(64));
        // Border cells see 6 cells: 255 / 6 = 42.5
        assert_eq!(img[[0, 1]], Pixel::gray(43));
        assert_eq!(img[[1, 2]], Pixel::gray(43));
    }

    #[test]
    fn test_corner_divisor_is_four() {
        let mut img = Array2::<Pixel>::default((4, 4));
        img[[0, 0]] = Pixel::new(4, 8, 100);

        let out = box_average(&img.view(), 0, 0);

        // Sum is the corner itself; a fixed divisor of 9 would give 0, 1, 11
        assert_eq!(out, Pixel::new(1, 2, 25));
    }

    #[test]
    fn test_blur_uniform_is_noop() {
        let color = Pixel::new(12, 200, 77);
        let mut img = Array2::from_elem((5, 6), color);
        blur(img.view_mut());
        assert!(img.iter().all(|&p| p == color));
    }

    #[test]
    fn test_blur_single_pixel_unchanged() {
        let mut img = array![[Pixel::new(1, 128, 255)]];
        blur(img.view_mut());
        assert_eq!(img[[0, 0]], Pixel::new(1, 128, 255));
    }

    #[test]
    fn test_blur_single_row() {
        let mut img = array![[Pixel::gray(0), Pixel::gray(90), Pixel::gray(30)]];
        blur(img.view_mut());

        // Windows hold 2, 3 and 2 cells
        assert_eq!(img, array![[Pixel::gray(45), Pixel::gray(40), Pixel::gray(60)]]);
    }

    #[test]
    fn test_blur_uses_original_neighbors() {
        let mut img = array![
            [Pixel::gray(255), Pixel::gray(0), Pixel::gray(0)],
            [Pixel::gray(0), Pixel::gray(0), Pixel::gray(0)],
        ];
        blur(img.view_mut());

        // (0,1) averages 6 cells holding one 255; an in-place pass would
        // have read the already-blurred (0,0) = 64 instead.
        assert_eq!(img[[0, 1]], Pixel::gray(43));
        assert_eq!(img[[0, 2]], Pixel::gray(0));
    }

    #[test]
    fn test_blur_channels_independent() {
        let mut img = array![[Pixel::new(255, 0, 0), Pixel::new(0, 0, 255)]];
        blur(img.view_mut());

        // 255 / 2 = 127.5 rounds up
        assert_eq!(img[[0, 0]], Pixel::new(128, 0, 128));
        assert_eq!(img[[0, 1]], Pixel::new(128, 0, 128));
    }

    #[test]
    fn test_blur_max_values_do_not_overflow() {
        let mut img = Array2::from_elem((3, 3), Pixel::WHITE);
        blur(img.view_mut());
        assert!(img.iter().all(|&p| p == Pixel::WHITE));
    }
}
