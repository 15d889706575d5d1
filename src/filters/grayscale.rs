//! Grayscale conversion filter.
//!
//! Replaces every pixel with the rounded arithmetic mean of its three
//! channels. This is an unweighted average, not a luminosity model.

use ndarray::ArrayViewMut2;

use super::core::round_channel;
use crate::pixel::Pixel;

/// Rounded mean of a pixel's blue, green and red values.
#[inline]
pub fn channel_mean(pixel: Pixel) -> u8 {
    let sum: u16 = pixel.channels().iter().map(|&c| c as u16).sum();
    round_channel(sum as f64 / 3.0)
}

/// Convert an image to grayscale in place.
///
/// Output has B = G = R = round((B + G + R) / 3). Empty images are left
/// untouched.
pub fn grayscale(mut image: ArrayViewMut2<Pixel>) {
    image.map_inplace(|pixel| *pixel = Pixel::gray(channel_mean(*pixel)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_channel_mean_rounds_to_nearest() {
        // 1/3 rounds down, 2/3 rounds up
        assert_eq!(channel_mean(Pixel::new(0, 0, 1)), 0);
        assert_eq!(channel_mean(Pixel::new(0, 1, 1)), 1);
        assert_eq!(channel_mean(Pixel::new(27, 28, 28)), 28);
        assert_eq!(channel_mean(Pixel::new(255, 255, 255)), 255);
    }

    #[test]
    fn test_grayscale_sets_all_channels_equal() {
        let mut img = array![
            [Pixel::new(0, 0, 255), Pixel::new(10, 20, 30)],
            [Pixel::new(255, 0, 0), Pixel::new(100, 101, 103)],
        ];

        grayscale(img.view_mut());

        assert_eq!(img[[0, 0]], Pixel::gray(85));
        assert_eq!(img[[0, 1]], Pixel::gray(20));
        assert_eq!(img[[1, 0]], Pixel::gray(85));
        // 304 / 3 = 101.33
        assert_eq!(img[[1, 1]], Pixel::gray(101));
    }

    #[test]
    fn test_grayscale_is_idempotent() {
        let mut img = Array2::from_shape_fn((3, 4), |(y, x)| {
            Pixel::new((y * 40) as u8, (x * 60) as u8, (y * x * 17) as u8)
        });

        grayscale(img.view_mut());
        let once = img.clone();
        grayscale(img.view_mut());

        assert_eq!(img, once);
    }

    #[test]
    fn test_grayscale_empty_image() {
        let mut img = Array2::<Pixel>::default((0, 0));
        grayscale(img.view_mut());
        assert_eq!(img.len(), 0);
    }
}
