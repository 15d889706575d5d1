//! Pixel type and conversions between pixel grids and raw buffers.
//!
//! A pixel grid is an `Array2<Pixel>` of shape (height, width). Hosts that
//! decode images usually hand over interleaved bytes instead, either as a
//! flat slice or as an (height, width, 3) array, so this module converts in
//! both directions. Channel order is explicit because BMP stores pixels as
//! blue-green-red while most array libraries use red-green-blue.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

use crate::error::{FilterError, Result};

/// One 24-bit pixel. No alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::gray(0);
    pub const WHITE: Pixel = Pixel::gray(255);

    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    /// Pixel with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Channels in blue, green, red order.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    #[inline]
    pub const fn from_channels(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

/// Byte order of a pixel inside an interleaved buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Blue, green, red (BMP `RGBTRIPLE` layout).
    #[default]
    Bgr,
    /// Red, green, blue (numpy / canvas layout).
    Rgb,
}

impl ChannelOrder {
    #[inline]
    fn pixel(self, bytes: [u8; 3]) -> Pixel {
        match self {
            ChannelOrder::Bgr => Pixel::new(bytes[0], bytes[1], bytes[2]),
            ChannelOrder::Rgb => Pixel::new(bytes[2], bytes[1], bytes[0]),
        }
    }

    #[inline]
    fn bytes(self, pixel: Pixel) -> [u8; 3] {
        match self {
            ChannelOrder::Bgr => [pixel.blue, pixel.green, pixel.red],
            ChannelOrder::Rgb => [pixel.red, pixel.green, pixel.blue],
        }
    }
}

/// Build a pixel grid from a flat, row-major interleaved buffer.
///
/// # Arguments
/// * `data` - `width * height * 3` bytes
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `order` - Channel order of each 3-byte group
pub fn pixels_from_interleaved(
    data: &[u8],
    width: usize,
    height: usize,
    order: ChannelOrder,
) -> Result<Array2<Pixel>> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .unwrap_or(usize::MAX);
    let size_error = || FilterError::BufferSize {
        width,
        height,
        expected,
        actual: data.len(),
    };
    if data.len() != expected {
        return Err(size_error());
    }

    let pixels: Vec<Pixel> = data
        .chunks_exact(3)
        .map(|c| order.pixel([c[0], c[1], c[2]]))
        .collect();

    Array2::from_shape_vec((height, width), pixels).map_err(|_| size_error())
}

/// Flatten a pixel grid into row-major interleaved bytes.
pub fn pixels_to_interleaved(image: ArrayView2<Pixel>, order: ChannelOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.len() * 3);
    for &pixel in image.iter() {
        out.extend_from_slice(&order.bytes(pixel));
    }
    out
}

/// Build a pixel grid from an (height, width, 3) array.
pub fn pixels_from_array3(input: ArrayView3<u8>, order: ChannelOrder) -> Result<Array2<Pixel>> {
    let (height, width, channels) = input.dim();
    if channels != 3 {
        return Err(FilterError::ChannelCount { found: channels });
    }

    Ok(Array2::from_shape_fn((height, width), |(y, x)| {
        order.pixel([input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]])
    }))
}

/// Expand a pixel grid into an (height, width, 3) array.
pub fn pixels_to_array3(image: ArrayView2<Pixel>, order: ChannelOrder) -> Array3<u8> {
    let (height, width) = image.dim();
    Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
        order.bytes(image[[y, x]])[c]
    })
}
