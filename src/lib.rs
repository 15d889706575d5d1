//! pixelfilter
//!
//! In-place pixel transforms for 24-bit images: grayscale averaging,
//! horizontal reflection, 3x3 box blur and Sobel edge detection, with
//! optional Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! The core operates on an `ndarray::Array2<Pixel>` of shape (height, width),
//! where each [`Pixel`] holds blue, green and red `u8` channels. Decoding
//! and encoding image files is left to the host; the [`pixel`] module
//! converts between pixel grids and interleaved byte buffers.
//!
//! ## Filters
//! All filters mutate the grid in place and never change its shape:
//! - [`filters::grayscale`] - rounded mean of the three channels
//! - [`filters::reflect`] - mirror each row
//! - [`filters::blur`] - edge-adaptive 3x3 box blur
//! - [`filters::edges`] - Sobel gradient magnitude with a zero border

pub mod error;
pub mod filters;
pub mod pixel;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FilterError, Result};
pub use filters::{apply, Filter};
pub use pixel::{ChannelOrder, Pixel};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use log::debug;
    use ndarray::Array2;
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FilterError;
    use crate::filters::{self, Filter};
    use crate::pixel::{pixels_from_array3, pixels_to_array3, ChannelOrder, Pixel};

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    /// Run `filter` on an (H, W, 3) RGB array and return a new array.
    fn run<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        filter: Filter,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut pixels: Array2<Pixel> = pixels_from_array3(image.as_array(), ChannelOrder::Rgb)?;
        filters::apply(filter, pixels.view_mut());
        Ok(pixels_to_array3(pixels.view(), ChannelOrder::Rgb).into_pyarray(py))
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Convert an (H, W, 3) RGB u8 image to grayscale (channel mean).
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Grayscale)
    }

    /// Mirror an (H, W, 3) RGB u8 image horizontally.
    #[pyfunction]
    pub fn reflect<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Reflect)
    }

    /// Apply a 3x3 box blur to an (H, W, 3) RGB u8 image.
    #[pyfunction]
    pub fn blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Blur)
    }

    /// Apply Sobel edge detection to an (H, W, 3) RGB u8 image.
    #[pyfunction]
    pub fn edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Edges)
    }

    /// Apply a filter selected by name or flag ("blur", "-b", ...).
    ///
    /// Raises `ValueError` for unknown names or non-RGB arrays.
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        name: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let filter: Filter = name.parse()?;
        debug!("python apply_filter: {filter}");
        run(py, image, filter)
    }

    /// pixelfilter extension module
    #[pymodule]
    pub fn pixelfilter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(reflect, m)?)?;
        m.add_function(wrap_pyfunction!(blur, m)?)?;
        m.add_function(wrap_pyfunction!(edges, m)?)?;
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixelfilter;
