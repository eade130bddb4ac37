//! Minimal 2D drawing capabilities the renderer needs from a raster.
//!
//! Shapes take fractional pixel coordinates and are anti-aliased by
//! per-pixel coverage: exact area for axis-aligned rectangles, a 4×4
//! supersample grid for curved outlines.

use image::{imageops, Rgba, RgbaImage};

/// Samples per pixel axis when estimating coverage of curved shapes.
const SUBSAMPLES: u32 = 4;

/// An axis-aligned rectangle in pixel space, `[x0, x1) × [y0, y1)`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A square with its top-left corner at `(x, y)`.
    pub fn square(x: f32, y: f32, side: f32) -> Self {
        Self::new(x, y, x + side, y + side)
    }

    /// Shrinks every edge by `by`.
    pub fn inset(self, by: f32) -> Self {
        Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    /// Grows every edge by `by`.
    pub fn outset(self, by: f32) -> Self {
        self.inset(-by)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
}

/// The drawing operations the renderer depends on.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>);
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba<u8>);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba<u8>);
    /// Copies `image` onto the canvas at `(x, y)`, replacing what is there.
    fn paste_image(&mut self, image: &RgbaImage, x: i64, y: i64);
}

impl Canvas for RgbaImage {
    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        if rect.is_empty() {
            return;
        }
        let Some((px0, py0, px1, py1)) = pixel_span(self, &rect) else {
            return;
        };
        for py in py0..py1 {
            let cy = overlap(py as f32, rect.y0, rect.y1);
            for px in px0..px1 {
                let coverage = overlap(px as f32, rect.x0, rect.x1) * cy;
                blend(self.get_pixel_mut(px, py), color, coverage);
            }
        }
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba<u8>) {
        if rect.is_empty() {
            return;
        }
        let r = radius.max(0.0).min(rect.width().min(rect.height()) / 2.0);
        fill_coverage(self, &rect, color, |sx, sy| {
            if sx < rect.x0 || sx >= rect.x1 || sy < rect.y0 || sy >= rect.y1 {
                return false;
            }
            let dx = (rect.x0 + r - sx).max(sx - (rect.x1 - r)).max(0.0);
            let dy = (rect.y0 + r - sy).max(sy - (rect.y1 - r)).max(0.0);
            dx * dx + dy * dy <= r * r
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
        if radius <= 0.0 {
            return;
        }
        let bbox = Rect::new(cx - radius, cy - radius, cx + radius, cy + radius);
        let r2 = radius * radius;
        fill_coverage(self, &bbox, color, |sx, sy| {
            let dx = sx - cx;
            let dy = sy - cy;
            dx * dx + dy * dy <= r2
        });
    }

    fn paste_image(&mut self, image: &RgbaImage, x: i64, y: i64) {
        imageops::replace(self, image, x, y);
    }
}

/// Integer pixel range touched by `rect`, clipped to the image.
fn pixel_span(image: &RgbaImage, rect: &Rect) -> Option<(u32, u32, u32, u32)> {
    let clamp = |v: f32, max: u32| v.max(0.0).min(max as f32) as u32;
    let px0 = clamp(rect.x0.floor(), image.width());
    let py0 = clamp(rect.y0.floor(), image.height());
    let px1 = clamp(rect.x1.ceil(), image.width());
    let py1 = clamp(rect.y1.ceil(), image.height());
    (px0 < px1 && py0 < py1).then_some((px0, py0, px1, py1))
}

/// Length of `[p, p + 1) ∩ [lo, hi)`.
fn overlap(p: f32, lo: f32, hi: f32) -> f32 {
    ((p + 1.0).min(hi) - p.max(lo)).clamp(0.0, 1.0)
}

fn fill_coverage(
    image: &mut RgbaImage,
    bbox: &Rect,
    color: Rgba<u8>,
    inside: impl Fn(f32, f32) -> bool,
) {
    let Some((px0, py0, px1, py1)) = pixel_span(image, bbox) else {
        return;
    };
    let step = 1.0 / SUBSAMPLES as f32;
    let total = (SUBSAMPLES * SUBSAMPLES) as f32;
    for py in py0..py1 {
        for px in px0..px1 {
            let mut hits = 0u32;
            for j in 0..SUBSAMPLES {
                let sy = py as f32 + (j as f32 + 0.5) * step;
                for i in 0..SUBSAMPLES {
                    let sx = px as f32 + (i as f32 + 0.5) * step;
                    if inside(sx, sy) {
                        hits += 1;
                    }
                }
            }
            if hits > 0 {
                blend(image.get_pixel_mut(px, py), color, hits as f32 / total);
            }
        }
    }
}

/// Source-over compositing of `src` at the given coverage.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let a = (src.0[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if a <= 0.0 {
        return;
    }
    if a >= 1.0 {
        *dst = src;
        return;
    }
    let da = dst.0[3] as f32 / 255.0;
    let out_a = a + da * (1.0 - a);
    for c in 0..3 {
        let s = src.0[c] as f32;
        let d = dst.0[c] as f32;
        let v = (s * a + d * da * (1.0 - a)) / out_a;
        dst.0[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}
