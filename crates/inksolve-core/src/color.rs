//! Color values for strokes and the canvas background.

use serde::{Deserialize, Serialize};

/// An RGBA8 color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse a CSS-style hex color (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    ///
    /// Returns `None` for anything that is not a well-formed hex color; the
    /// caller decides how to reject invalid input.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?.trim();
        if !hex.is_ascii() {
            return None;
        }
        let digit = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let r = digit(&hex[0..1])? * 17;
                let g = digit(&hex[1..2])? * 17;
                let b = digit(&hex[2..3])? * 17;
                Some(Self::new(r, g, b, 255))
            }
            6 | 8 => {
                let r = digit(&hex[0..2])?;
                let g = digit(&hex[2..4])?;
                let b = digit(&hex[4..6])?;
                let a = if hex.len() == 8 { digit(&hex[6..8])? } else { 255 };
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as `#rrggbb` (alpha is dropped; strokes are opaque).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::white()
    }
}
