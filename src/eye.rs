//! Finder pattern ("eye") artwork.
//!
//! A QR symbol carries three 7×7-module finder patterns: top-left,
//! top-right and bottom-left. Each eye is three concentric layers (a
//! 1-module dark ring, a 1-module light ring and a 3×3 dark core), which
//! lets every style be described as a list of filled shapes drawn outer to
//! inner.

use core::fmt;
use core::str::FromStr;

use image::Rgba;
use log::debug;

use crate::canvas::{Canvas, Rect};
use crate::error::{RenderError, Result};
use crate::matrix::{BitMatrix, Bounds};

/// Modules along one side of a finder pattern.
pub const FINDER_MODULES: f32 = 7.0;

/// Shape family used to redraw the three eyes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum EyeStyle {
    /// Plain squares, identical to the encoded modules.
    #[default]
    Square,
    /// Squares with rounded corners.
    Rounded,
    /// Concentric circles.
    Circle,
}

impl EyeStyle {
    pub const ALL: [EyeStyle; 3] = [EyeStyle::Square, EyeStyle::Rounded, EyeStyle::Circle];

    pub fn name(self) -> &'static str {
        match self {
            EyeStyle::Square => "square",
            EyeStyle::Rounded => "rounded",
            EyeStyle::Circle => "circle",
        }
    }
}

impl fmt::Display for EyeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EyeStyle {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        EyeStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown eye style '{}', expected square, rounded or circle", s))
    }
}

/// How the pixel side of a finder pattern is derived from the matrix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum FinderSizing {
    /// One third of the symbol width. Exact only for 21-module (version 1)
    /// symbols; larger versions get oversized eyes that cover nearby modules.
    #[default]
    Approximate,
    /// Length of the dark run along the top edge of the top-left finder,
    /// which is exactly seven modules for every version.
    Measured,
}

/// Which corner of the symbol an eye sits in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
}

/// Placement of one eye in raster pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FinderGeometry {
    pub corner: Corner,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl FinderGeometry {
    pub fn area(&self) -> Rect {
        Rect::square(self.x, self.y, self.size)
    }
}

/// Which of the two render colors a shape is filled with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ink {
    Foreground,
    Background,
}

/// One filled shape of an eye.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DrawCommand {
    Rect { rect: Rect, ink: Ink },
    RoundedRect { rect: Rect, radius: f32, ink: Ink },
    Circle { cx: f32, cy: f32, radius: f32, ink: Ink },
}

/// Side length in pixels of each finder pattern.
///
/// Fails with [`RenderError::DegenerateMatrix`] when the result would be
/// zero, since no eye can be drawn from it.
pub fn finder_size(matrix: &BitMatrix, bounds: &Bounds, sizing: FinderSizing) -> Result<u32> {
    let size = match sizing {
        FinderSizing::Approximate => bounds.width() / 3,
        FinderSizing::Measured => (bounds.min_x..=bounds.max_x)
            .take_while(|&x| matrix.get(x, bounds.min_y))
            .count() as u32,
    };
    if size == 0 {
        return Err(RenderError::DegenerateMatrix);
    }
    Ok(size)
}

/// Origins of the three eyes; the bottom-right corner never has one.
pub fn finder_geometries(bounds: &Bounds, size: u32) -> [FinderGeometry; 3] {
    let size_f = size as f32;
    let left = bounds.min_x as f32;
    let top = bounds.min_y as f32;
    let right = bounds.max_x as f32 - size_f + 1.0;
    let bottom = bounds.max_y as f32 - size_f + 1.0;
    [
        FinderGeometry { corner: Corner::TopLeft, x: left, y: top, size: size_f },
        FinderGeometry { corner: Corner::TopRight, x: right, y: top, size: size_f },
        FinderGeometry { corner: Corner::BottomLeft, x: left, y: bottom, size: size_f },
    ]
}

/// The shapes making up one eye of `style` at `(x, y)` with side `size`,
/// ordered outer to inner.
pub fn eye_commands(style: EyeStyle, x: f32, y: f32, size: f32) -> Vec<DrawCommand> {
    let unit = size / FINDER_MODULES;
    let outer = Rect::square(x, y, size);
    let ring = outer.inset(unit);
    let core = outer.inset(2.0 * unit);
    match style {
        EyeStyle::Square => vec![
            DrawCommand::Rect { rect: outer, ink: Ink::Foreground },
            DrawCommand::Rect { rect: ring, ink: Ink::Background },
            DrawCommand::Rect { rect: core, ink: Ink::Foreground },
        ],
        EyeStyle::Rounded => vec![
            DrawCommand::RoundedRect { rect: outer, radius: size * 0.22, ink: Ink::Foreground },
            DrawCommand::RoundedRect { rect: ring, radius: size * 0.18, ink: Ink::Background },
            DrawCommand::RoundedRect { rect: core, radius: size * 0.12, ink: Ink::Foreground },
        ],
        EyeStyle::Circle => {
            let cx = x + size / 2.0;
            let cy = y + size / 2.0;
            vec![
                DrawCommand::Circle { cx, cy, radius: size / 2.0, ink: Ink::Foreground },
                DrawCommand::Circle { cx, cy, radius: (size - 2.0 * unit) / 2.0, ink: Ink::Background },
                DrawCommand::Circle { cx, cy, radius: (size - 4.0 * unit) / 2.0, ink: Ink::Foreground },
            ]
        }
    }
}

/// Executes a single shape against `canvas`.
pub fn draw<C: Canvas + ?Sized>(canvas: &mut C, command: &DrawCommand, fg: Rgba<u8>, bg: Rgba<u8>) {
    let pick = |ink: Ink| match ink {
        Ink::Foreground => fg,
        Ink::Background => bg,
    };
    match *command {
        DrawCommand::Rect { rect, ink } => canvas.fill_rect(rect, pick(ink)),
        DrawCommand::RoundedRect { rect, radius, ink } => canvas.fill_rounded_rect(rect, radius, pick(ink)),
        DrawCommand::Circle { cx, cy, radius, ink } => canvas.fill_circle(cx, cy, radius, pick(ink)),
    }
}

/// Erases the three finder regions to `bg` and redraws them in `style`.
pub fn render_finder_patterns<C: Canvas + ?Sized>(
    canvas: &mut C,
    geometries: &[FinderGeometry],
    style: EyeStyle,
    fg: Rgba<u8>,
    bg: Rgba<u8>,
) {
    debug!("Drawing custom eye style: {}", style);
    for g in geometries {
        canvas.fill_rect(g.area(), bg);
    }
    for g in geometries {
        for command in eye_commands(style, g.x, g.y, g.size) {
            draw(canvas, &command, fg, bg);
        }
        debug!("Eye {:?} drawn at ({}, {}) size {}", g.corner, g.x, g.y, g.size);
    }
}
