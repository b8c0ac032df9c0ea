//! Paint primitives for node frames
//!
//! Colors and outline pens, serializable so themes can live in config files.

use kurbo::{Join as KurboJoin, Stroke as KurboStroke};
use serde::{Deserialize, Serialize};
use vello::peniko::Color;

/// Serializable color representation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    /// Create from RGB (opaque)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create from RGBA
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to peniko Color
    pub fn to_peniko(&self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        // components are [r, g, b, a] floats in 0.0-1.0
        let components = color.components;
        Self {
            r: (components[0] * 255.0).round() as u8,
            g: (components[1] * 255.0).round() as u8,
            b: (components[2] * 255.0).round() as u8,
            a: (components[3] * 255.0).round() as u8,
        }
    }
}

/// A solid pen used to outline a path
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutlineStyle {
    pub color: ShapeColor,
    /// Pen width in pixels, centered on the path
    pub width: f64,
}

impl OutlineStyle {
    pub const fn new(color: ShapeColor, width: f64) -> Self {
        Self { color, width }
    }

    /// Convert to kurbo Stroke
    pub fn to_stroke(&self) -> KurboStroke {
        KurboStroke::new(self.width).with_join(KurboJoin::Miter)
    }
}
