//! Centered logo overlay.
//!
//! The logo sits on a padded rounded backdrop in the background color so the
//! modules it covers leave a clean light area instead of ragged module edges.
//! Covering the center is only safe when the symbol was encoded with high
//! error correction; [`crate::render`] takes care of requesting it.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use log::debug;

use crate::canvas::{Canvas, Rect};

/// Logo side as a fraction of the raster width.
pub const LOGO_SCALE: f64 = 0.22;
/// Backdrop margin around the logo, also used as its corner radius.
pub const LOGO_PADDING: f32 = 4.0;

/// Side length in pixels of the logo on a raster `width` pixels wide.
pub fn logo_side(width: u32) -> u32 {
    (f64::from(width) * LOGO_SCALE) as u32
}

/// Scales `logo` to a square of [`logo_side`] pixels and pastes it at the
/// center of `canvas` over a padded backdrop in `bg`.
///
/// Transparent logo pixels are flattened onto `bg` first, so the pasted
/// block is opaque and never mixes with the modules underneath.
pub fn overlay_logo(canvas: &mut RgbaImage, logo: &DynamicImage, bg: Rgba<u8>) {
    let side = logo_side(canvas.width());
    if side == 0 {
        debug!("Raster too small for a logo, skipping");
        return;
    }
    let mut scaled = imageops::resize(&logo.to_rgba8(), side, side, FilterType::Triangle);
    flatten(&mut scaled, bg);

    let x = (canvas.width() - side) / 2;
    let y = (canvas.height().saturating_sub(side)) / 2;
    let backdrop = Rect::square(x as f32, y as f32, side as f32).outset(LOGO_PADDING);
    canvas.fill_rounded_rect(backdrop, LOGO_PADDING, bg);
    canvas.paste_image(&scaled, i64::from(x), i64::from(y));
    debug!("Logo {}x{} placed at ({}, {})", side, side, x, y);
}

/// Composites every pixel of `img` over an opaque `bg`.
fn flatten(img: &mut RgbaImage, bg: Rgba<u8>) {
    for px in img.pixels_mut() {
        let a = px.0[3] as u32;
        for c in 0..3 {
            let v = px.0[c] as u32 * a + bg.0[c] as u32 * (255 - a);
            px.0[c] = ((v + 127) / 255) as u8;
        }
        px.0[3] = 255;
    }
}
