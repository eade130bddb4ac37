//! The render pipeline: encode, detect bounds, rasterize, restyle the eyes,
//! overlay the logo.
//!
//! Every call is independent and keeps no state, so rendering different
//! payloads from several threads at once needs no coordination.

use image::{DynamicImage, RgbaImage};
use log::{debug, warn};

use crate::color::Color;
use crate::encoder::{ErrorCorrection, QrEncoder, SymbolEncoder, MAX_SIZE};
use crate::error::{RenderError, Result};
use crate::eye::{self, EyeStyle, FinderSizing};
use crate::logo;
use crate::matrix::Bounds;
use crate::raster;

/// Default raster side in pixels.
pub const DEFAULT_SIZE: u32 = 512;

/// Styling for one render.
///
/// Both colors must be fully opaque: the eye pass clears the finder area with
/// the background before redrawing it, and a translucent clear would leave the
/// encoded square finder showing through.
///
/// # Example
///
/// ```rust
/// use qivault::{Color, EyeStyle, RenderConfig};
///
/// let config = RenderConfig::default()
///     .with_colors(Color::rgb(0x0A, 0x0F, 0x1C), Color::WHITE)
///     .with_eye_style(EyeStyle::Rounded);
/// let img = qivault::render("https://example.com", 256, &config).unwrap();
/// assert_eq!(img.width(), 256);
/// ```
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub foreground: Color,
    pub background: Color,
    pub eye_style: EyeStyle,
    pub finder_sizing: FinderSizing,
    pub logo: Option<DynamicImage>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
            eye_style: EyeStyle::default(),
            finder_sizing: FinderSizing::default(),
            logo: None,
        }
    }
}

impl RenderConfig {
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            ..Self::default()
        }
    }

    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub fn with_eye_style(mut self, eye_style: EyeStyle) -> Self {
        self.eye_style = eye_style;
        self
    }

    pub fn with_finder_sizing(mut self, finder_sizing: FinderSizing) -> Self {
        self.finder_sizing = finder_sizing;
        self
    }

    pub fn with_logo(mut self, logo: DynamicImage) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Correction level the encoder must be asked for with this styling.
    pub fn error_correction(&self) -> ErrorCorrection {
        ErrorCorrection::for_logo(self.logo.is_some())
    }
}

/// Renders `payload` as a styled QR code roughly `size` pixels square.
///
/// Returns `None` on any failure; see [`try_render`] for the cause.
pub fn render(payload: &str, size: u32, config: &RenderConfig) -> Option<RgbaImage> {
    render_with(&QrEncoder, payload, size, config)
}

/// Like [`render`], but reports why rendering failed.
pub fn try_render(payload: &str, size: u32, config: &RenderConfig) -> Result<RgbaImage> {
    try_render_with(&QrEncoder, payload, size, config)
}

/// [`render`] with a caller-supplied symbol encoder.
pub fn render_with<E: SymbolEncoder + ?Sized>(
    encoder: &E,
    payload: &str,
    size: u32,
    config: &RenderConfig,
) -> Option<RgbaImage> {
    match try_render_with(encoder, payload, size, config) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!("Render failed: {}", e);
            None
        }
    }
}

/// [`try_render`] with a caller-supplied symbol encoder.
pub fn try_render_with<E: SymbolEncoder + ?Sized>(
    encoder: &E,
    payload: &str,
    size: u32,
    config: &RenderConfig,
) -> Result<RgbaImage> {
    if size == 0 || size > MAX_SIZE {
        return Err(RenderError::InvalidSize(size));
    }
    if payload.is_empty() {
        return Err(RenderError::EmptyPayload);
    }
    for color in [config.foreground, config.background] {
        if !color.is_opaque() {
            return Err(RenderError::InvalidColor(color.to_hex()));
        }
    }

    let matrix = encoder.encode(payload, size, config.error_correction())?;
    debug!("BitMatrix: {}x{}, requested size: {}", matrix.width(), matrix.height(), size);

    let bounds = Bounds::detect(&matrix).ok_or(RenderError::DegenerateMatrix)?;
    debug!(
        "QR content bounds: ({},{}) to ({},{}), size: {}x{}",
        bounds.min_x,
        bounds.min_y,
        bounds.max_x,
        bounds.max_y,
        bounds.width(),
        bounds.height()
    );

    let fg = config.foreground.to_rgba();
    let bg = config.background.to_rgba();
    let mut img = raster::rasterize(&matrix, fg, bg);

    // Square eyes are already drawn correctly by the module pass.
    if config.eye_style != EyeStyle::Square {
        let finder = eye::finder_size(&matrix, &bounds, config.finder_sizing)?;
        debug!("Finder pattern size: {} pixels ({:?})", finder, config.finder_sizing);
        let geometries = eye::finder_geometries(&bounds, finder);
        eye::render_finder_patterns(&mut img, &geometries, config.eye_style, fg, bg);
    }

    if let Some(logo_img) = &config.logo {
        logo::overlay_logo(&mut img, logo_img, bg);
    }

    Ok(img)
}
