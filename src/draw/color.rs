//! RGBA color type, toolbar palette, and hex parsing.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rrggbb` or `#rgb` (leading `#` optional, case-insensitive).
    ///
    /// Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // Expand shorthand: #f80 -> #ff8800
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self::from_rgb8(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => None,
        }
    }

    /// Formats the color as `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

// ============================================================================
// Toolbar Palette
// ============================================================================

/// Predefined black color (#000000)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined white color (#FFFFFF)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Rose (#FF4D6D)
pub const ROSE: Color = Color {
    r: 1.0,
    g: 77.0 / 255.0,
    b: 109.0 / 255.0,
    a: 1.0,
};

/// Purple (#6B46C1)
pub const PURPLE: Color = Color {
    r: 107.0 / 255.0,
    g: 70.0 / 255.0,
    b: 193.0 / 255.0,
    a: 1.0,
};

/// Indigo (#4F46E5)
pub const INDIGO: Color = Color {
    r: 79.0 / 255.0,
    g: 70.0 / 255.0,
    b: 229.0 / 255.0,
    a: 1.0,
};

/// Amber (#FBBF24)
pub const AMBER: Color = Color {
    r: 251.0 / 255.0,
    g: 191.0 / 255.0,
    b: 36.0 / 255.0,
    a: 1.0,
};

/// Pink (#EC4899)
pub const PINK: Color = Color {
    r: 236.0 / 255.0,
    g: 72.0 / 255.0,
    b: 153.0 / 255.0,
    a: 1.0,
};

/// Teal (#14B8A6)
pub const TEAL: Color = Color {
    r: 20.0 / 255.0,
    g: 184.0 / 255.0,
    b: 166.0 / 255.0,
    a: 1.0,
};

/// Slate (#1E293B), the default pen color
pub const SLATE: Color = Color {
    r: 30.0 / 255.0,
    g: 41.0 / 255.0,
    b: 59.0 / 255.0,
    a: 1.0,
};

/// Fully transparent color, the cleared-surface value
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// Preset swatches in toolbar order.
pub const PALETTE: [Color; 8] = [BLACK, WHITE, ROSE, PURPLE, INDIGO, AMBER, PINK, TEAL];
