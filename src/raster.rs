//! Module-to-pixel rasterization of a bit matrix.

use image::{Rgba, RgbaImage};

use crate::matrix::BitMatrix;

/// Paints `matrix` 1:1 onto a fresh raster: `bg` everywhere, then `fg` on
/// every dark module. No anti-aliasing; module edges stay on pixel edges.
pub fn rasterize(matrix: &BitMatrix, fg: Rgba<u8>, bg: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(matrix.width(), matrix.height(), bg);
    for (x, y) in matrix.dark_modules() {
        img.put_pixel(x, y, fg);
    }
    img
}
