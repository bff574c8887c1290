//! Font descriptor for text stamping.

/// Multiplier from line width to glyph size (a size-5 pen stamps 20px text).
pub const DEFAULT_TEXT_SCALE: f64 = 4.0;

/// Font configuration for the text tool.
///
/// Describes which font to use, including family name, weight, and style. The size is
/// never stored here: it is always derived from the current line width at stamp time.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Arial", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,

    /// Glyph size per unit of line width
    pub scale: f64,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the default text scale.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
            scale: DEFAULT_TEXT_SCALE,
        }
    }

    /// Glyph size in pixels for a given line width.
    pub fn size_for(&self, line_width: f64) -> f64 {
        line_width * self.scale
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Sizepx"
    /// Example: "Sans Bold 20px" or "Monospace Italic 24px"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        // Absolute pixel size; the surface has no DPI
        parts.push(format!("{}px", size.round().max(1.0) as i32));

        parts.join(" ")
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(
            "Sans".to_string(),
            "normal".to_string(),
            "normal".to_string(),
        )
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
