//! # qivault
//!
//! A Rust library for rendering styled QR codes.
//!
//! `qivault` takes a payload, encodes it with the [`qrcode`](https://docs.rs/qrcode) crate, and
//! paints the resulting bit matrix onto an RGBA image. On top of the plain module grid it can
//! redraw the three finder patterns ("eyes") as rounded squares or concentric circles and paste a
//! logo in the center, while keeping the symbol scannable.
//!
//! ## Features
//!
//! - Custom foreground and background colors.
//! - Square, rounded, or circular finder-pattern eyes, anti-aliased.
//! - Centered logo overlay on a padded backdrop, with high error correction requested automatically.
//! - Payload builders for WiFi, vCard, and e-mail codes.
//! - PNG output to disk or memory.
//! - Stateless: every render is independent and safe to run from many threads.
//!
//! ## Example
//!
//! Render a QR code with circular eyes:
//!
//! ```rust
//! use qivault::{render, Color, EyeStyle, RenderConfig};
//!
//! let config = RenderConfig::new(Color::rgb(0x10, 0xB9, 0x81), Color::WHITE)
//!     .with_eye_style(EyeStyle::Circle);
//! let img = render("https://example.com", 512, &config).expect("render failed");
//! assert_eq!(img.dimensions(), (512, 512));
//! ```
//!
//! Find out why a render failed:
//!
//! ```rust
//! use qivault::{try_render, RenderConfig, RenderError};
//!
//! let err = try_render("", 512, &RenderConfig::default()).unwrap_err();
//! assert!(matches!(err, RenderError::EmptyPayload));
//! ```
//!
//! ## Modules
//!
//! - [`render`]: The render pipeline and its configuration.
//! - [`eye`]: Finder pattern geometry and styles.
//! - [`logo`]: Centered logo overlay.
//! - [`encoder`]: The symbol encoder seam.
//! - [`canvas`]: Anti-aliased drawing primitives.
//! - [`payload`]: WiFi, vCard, and e-mail payload builders.
//! - [`helper`]: Utilities for saving and loading images.

#![forbid(unsafe_code)]

pub mod canvas;
pub mod color;
pub mod encoder;
pub mod error;
pub mod eye;
pub mod helper;
pub mod logo;
pub mod matrix;
pub mod payload;
pub mod raster;
pub mod render;

pub use color::Color;
pub use encoder::{ErrorCorrection, QrEncoder, SymbolEncoder, MAX_SIZE};
pub use error::{RenderError, Result};
pub use eye::{EyeStyle, FinderSizing};
pub use matrix::{BitMatrix, Bounds};
pub use payload::Payload;
pub use render::{render, render_with, try_render, try_render_with, RenderConfig};
