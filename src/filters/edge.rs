//! Sobel edge detection.
//!
//! Every channel is processed independently: for each cell the two Sobel
//! kernels are convolved over the 3x3 neighborhood and the gradient
//! magnitude `sqrt(Gx^2 + Gy^2)` becomes the new channel value, rounded and
//! capped at 255.
//!
//! ## Border Handling
//!
//! Cells outside the image count as black (zero border). A uniform image
//! therefore has zero gradient inside but lights up along its edges, since
//! the border is a real step from the image to black.

use ndarray::{ArrayView2, ArrayViewMut2};

use super::core::{map_staged, round_channel, window_3x3};
use crate::pixel::Pixel;

/// Horizontal gradient kernel.
pub const SOBEL_GX: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical gradient kernel.
pub const SOBEL_GY: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Raw Sobel responses at (y, x), per channel in blue, green, red order.
///
/// Returns `(gx, gy)`. Sums are unnormalized; out-of-bounds cells add
/// nothing.
pub fn sobel_gradients(input: &ArrayView2<Pixel>, y: usize, x: usize) -> ([i32; 3], [i32; 3]) {
    let (height, width) = input.dim();
    let mut gx = [0i32; 3];
    let mut gy = [0i32; 3];

    for ([ky, kx], [sy, sx]) in window_3x3(y, x, height, width) {
        let wx = SOBEL_GX[ky][kx];
        let wy = SOBEL_GY[ky][kx];
        for (c, value) in input[[sy, sx]].channels().into_iter().enumerate() {
            gx[c] += wx * value as i32;
            gy[c] += wy * value as i32;
        }
    }

    (gx, gy)
}

/// Combine two gradient components into a channel value.
#[inline]
pub fn gradient_magnitude(gx: i32, gy: i32) -> u8 {
    let (gx, gy) = (gx as f64, gy as f64);
    round_channel((gx * gx + gy * gy).sqrt())
}

/// Sobel edge pixel at (y, x) of the original image.
pub fn sobel_pixel(input: &ArrayView2<Pixel>, y: usize, x: usize) -> Pixel {
    let (gx, gy) = sobel_gradients(input, y, x);
    Pixel::from_channels([
        gradient_magnitude(gx[0], gy[0]),
        gradient_magnitude(gx[1], gy[1]),
        gradient_magnitude(gx[2], gy[2]),
    ])
}

/// Replace an image with its Sobel edge magnitudes in place.
///
/// Both gradients are taken from the original pixels; results are staged
/// and copied back once every cell is done.
pub fn edges(image: ArrayViewMut2<Pixel>) {
    map_staged(image, sobel_pixel);
}
