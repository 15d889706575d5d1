//! Filter modules for 24-bit pixel grids.
//!
//! ## Image Format
//!
//! | Type | Shape | Description |
//! |------|-------|-------------|
//! | `Array2<Pixel>` | (H, W) | Row-major grid of blue/green/red `u8` triples |
//!
//! Every filter takes an `ArrayViewMut2<Pixel>` and rewrites it in place.
//! The grid's shape never changes. Empty, single-row and single-column
//! images are valid input for every filter.
//!
//! ## Filter Categories
//!
//! - **Pixel-wise**: grayscale
//! - **Geometric**: reflect
//! - **Neighborhood (3x3)**: blur, edges. These read only the original
//!   pixels and stage results in a scratch buffer; rows are computed in
//!   parallel with Rayon.

use std::fmt;
use std::str::FromStr;

use log::debug;
use ndarray::ArrayViewMut2;

use crate::error::FilterError;
use crate::pixel::Pixel;

pub mod core;
pub mod grayscale;
pub mod reflect;
pub mod blur;
pub mod edge;

pub use blur::blur;
pub use edge::edges;
pub use grayscale::grayscale;
pub use reflect::reflect;

/// Selects one of the available filters.
///
/// Parses from the full name or from the single-letter flag a host program
/// takes on its command line (`g`, `r`, `b`, `e`, optionally written with a
/// leading `-`). Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Grayscale,
    Reflect,
    Blur,
    Edges,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::Grayscale, Filter::Reflect, Filter::Blur, Filter::Edges];

    pub fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Reflect => "reflect",
            Filter::Blur => "blur",
            Filter::Edges => "edges",
        }
    }

    /// Single-letter flag for this filter.
    pub fn flag(self) -> char {
        match self {
            Filter::Grayscale => 'g',
            Filter::Reflect => 'r',
            Filter::Blur => 'b',
            Filter::Edges => 'e',
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches('-').to_ascii_lowercase();
        match key.as_str() {
            "g" | "grayscale" | "greyscale" => Ok(Filter::Grayscale),
            "r" | "reflect" => Ok(Filter::Reflect),
            "b" | "blur" => Ok(Filter::Blur),
            "e" | "edges" => Ok(Filter::Edges),
            _ => Err(FilterError::UnknownFilter(s.to_string())),
        }
    }
}

/// Apply `filter` to `image` in place.
pub fn apply(filter: Filter, image: ArrayViewMut2<Pixel>) {
    let (height, width) = image.dim();
    debug!("apply {filter} to {width}x{height} image");

    match filter {
        Filter::Grayscale => grayscale(image),
        Filter::Reflect => reflect(image),
        Filter::Blur => blur(image),
        Filter::Edges => edges(image),
    }
}
