//! Errors raised at the buffer-conversion boundary.
//!
//! The transforms themselves cannot fail. Only turning caller-supplied
//! byte buffers or arrays into a pixel grid, and parsing filter names,
//! can reject input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Flat buffer length does not match `width * height * 3`.
    #[error("buffer of {actual} bytes does not fit a {width}x{height} image (expected {expected})")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// Array passed with a channel axis other than 3.
    #[error("expected 3 color channels, found {found}")]
    ChannelCount { found: usize },

    #[error("unknown filter: {0:?}")]
    UnknownFilter(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
