//! The symbol encoder seam.
//!
//! Encoding (codewords, masking, version selection) is delegated entirely to
//! the `qrcode` crate. This module only adapts its module grid into a
//! [`BitMatrix`] already scaled to the requested pixel dimension, with no
//! quiet zone, which is what the renderer draws 1:1.

use log::debug;
use qrcode::{EcLevel, QrCode};

use crate::error::{RenderError, Result};
use crate::matrix::BitMatrix;

/// Largest raster side the encoder will produce, in pixels.
pub const MAX_SIZE: u32 = 8192;

/// Error correction strength requested from the encoder.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ErrorCorrection {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl ErrorCorrection {
    /// A logo hides modules near the center, so it needs the strongest level.
    pub fn for_logo(has_logo: bool) -> Self {
        if has_logo {
            ErrorCorrection::High
        } else {
            ErrorCorrection::Medium
        }
    }

    fn ec_level(self) -> EcLevel {
        use ErrorCorrection::*;
        match self {
            Low => EcLevel::L,
            Medium => EcLevel::M,
            Quartile => EcLevel::Q,
            High => EcLevel::H,
        }
    }
}

/// Turns a text payload into a square bit matrix sized to `size` pixels.
pub trait SymbolEncoder {
    fn encode(&self, payload: &str, size: u32, ecc: ErrorCorrection) -> Result<BitMatrix>;
}

impl<F> SymbolEncoder for F
where
    F: Fn(&str, u32, ErrorCorrection) -> Result<BitMatrix>,
{
    fn encode(&self, payload: &str, size: u32, ecc: ErrorCorrection) -> Result<BitMatrix> {
        self(payload, size, ecc)
    }
}

/// QR Code Model 2 encoder backed by the `qrcode` crate.
///
/// The output matrix is `max(size, modules)` wide. Each module becomes an
/// integer `multiple × multiple` block and the symbol is centered, so the
/// leftover pixels form a thin light border even with no quiet zone.
#[derive(Clone, Copy, Default, Debug)]
pub struct QrEncoder;

impl SymbolEncoder for QrEncoder {
    fn encode(&self, payload: &str, size: u32, ecc: ErrorCorrection) -> Result<BitMatrix> {
        if size == 0 || size > MAX_SIZE {
            return Err(RenderError::InvalidSize(size));
        }
        if payload.is_empty() {
            return Err(RenderError::EmptyPayload);
        }

        let code = QrCode::with_error_correction_level(payload.as_bytes(), ecc.ec_level())
            .map_err(|e| RenderError::Encoding(e.to_string()))?;
        let modules = u32::try_from(code.width()).map_err(|e| RenderError::Encoding(e.to_string()))?;
        let colors = code.to_colors();

        let output = size.max(modules);
        let multiple = output / modules;
        let padding = (output - modules * multiple) / 2;
        debug!(
            "Encoded {} modules per side, multiple {}, padding {}, ecc {:?}",
            modules, multiple, padding, ecc
        );

        Ok(BitMatrix::from_fn(output, |x, y| {
            if x < padding || y < padding {
                return false;
            }
            let mx = (x - padding) / multiple;
            let my = (y - padding) / multiple;
            mx < modules
                && my < modules
                && colors[(my * modules + mx) as usize] == qrcode::Color::Dark
        }))
    }
}
