//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::LineCap;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the toolbar state a new board starts with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - a palette name (black, white, rose, purple, indigo, amber, pink,
    /// teal, slate), a hex code like `"#14b8a6"`, or an RGB array like `[20, 184, 166]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Tool selected at startup (brush, eraser, line, rectangle, circle, star, text)
    #[serde(default)]
    pub default_tool: Tool,

    /// Default line width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_size")]
    pub default_size: f64,

    /// Default global opacity (valid range: 0.1 - 1.0)
    #[serde(default = "default_opacity")]
    pub default_opacity: f64,

    /// Stroke end style for every tool (round, square, butt)
    #[serde(default)]
    pub default_brush_cap: LineCap,

    /// Font family name for text stamping (e.g., "Sans", "Monospace", "JetBrains Mono")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", or numeric 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Glyph size as a multiple of the line width (valid range: 1.0 - 10.0)
    #[serde(default = "default_text_scale")]
    pub text_scale: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_tool: Tool::default(),
            default_size: default_size(),
            default_opacity: default_opacity(),
            default_brush_cap: LineCap::default(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            text_scale: default_text_scale(),
        }
    }
}

/// Initial surface dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Width in pixels (minimum 1)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Height in pixels (minimum 1)
    #[serde(default = "default_height")]
    pub height: i32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Where exported drawings are written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for saved drawings (`~` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template without extension (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("slate".to_string())
}

fn default_size() -> f64 {
    5.0
}

fn default_opacity() -> f64 {
    1.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_text_scale() -> f64 {
    crate::draw::font::DEFAULT_TEXT_SCALE
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_save_directory() -> String {
    "~/Pictures/Sketchboard".to_string()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
