use ndarray::Array2;
use pixelfilter::Pixel;

/// Deterministic image where every channel varies with position.
pub fn gradient_image(height: usize, width: usize) -> Array2<Pixel> {
    Array2::from_shape_fn((height, width), |(y, x)| {
        Pixel::new(
            ((x * 37 + y * 11) % 256) as u8,
            ((y * 53 + 7) % 256) as u8,
            ((x * y * 29 + 101) % 256) as u8,
        )
    })
}

/// 3x3 black image with a white center pixel.
pub fn white_center() -> Array2<Pixel> {
    let mut img = Array2::<Pixel>::default((3, 3));
    img[[1, 1]] = Pixel::WHITE;
    img
}
