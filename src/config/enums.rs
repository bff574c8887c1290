//! Configuration enum types.

use crate::draw::{Color, color::SLATE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color, a hex code, or RGB values.
///
/// # Examples
/// ```toml
/// # Palette color
/// default_color = "teal"
///
/// # Hex code
/// default_color = "#ff8800"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (black, white, rose, purple, indigo, amber, pink, teal, slate) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names fall back to slate with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using slate", name);
                SLATE
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}
