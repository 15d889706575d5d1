//! WebAssembly exports for the pixel filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! All exports take a flat array of RGB bytes (length = width * height * 3)
//! and return a new array of the same layout. A buffer whose length does
//! not match the dimensions, or an unknown filter name, raises a JS error.

use log::debug;
use wasm_bindgen::prelude::*;

use crate::filters::{self, Filter};
use crate::pixel::{pixels_from_interleaved, pixels_to_interleaved, ChannelOrder};

fn run(data: &[u8], width: usize, height: usize, filter: Filter) -> Result<Vec<u8>, JsError> {
    let mut pixels = pixels_from_interleaved(data, width, height, ChannelOrder::Rgb)?;
    filters::apply(filter, pixels.view_mut());
    Ok(pixels_to_interleaved(pixels.view(), ChannelOrder::Rgb))
}

/// Convert an RGB image to grayscale (mean of the three channels).
///
/// # Arguments
/// * `data` - Flat array of RGB bytes (length = width * height * 3)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
#[wasm_bindgen]
pub fn grayscale_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Grayscale)
}

/// Mirror an RGB image horizontally.
#[wasm_bindgen]
pub fn reflect_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Reflect)
}

/// Apply a 3x3 box blur to an RGB image.
#[wasm_bindgen]
pub fn blur_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Blur)
}

/// Apply Sobel edge detection to an RGB image.
#[wasm_bindgen]
pub fn edges_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Edges)
}

/// Apply a filter selected by name or flag ("grayscale", "g", "-g", ...).
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    name: &str,
) -> Result<Vec<u8>, JsError> {
    let filter: Filter = name.parse()?;
    debug!("wasm apply_filter: {filter}");
    run(data, width, height, filter)
}
