//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchboard/config.toml`. Settings include the initial toolbar
//! state, font, surface size, and where exported drawings go.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, ExportConfig, SurfaceConfig};

use crate::draw::FontDescriptor;
use crate::export::{FileSaveConfig, expand_tilde};
use crate::input::ToolSelection;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "teal"
/// default_tool = "brush"
/// default_size = 8.0
/// default_brush_cap = "square"
///
/// [surface]
/// width = 1024
/// height = 768
///
/// [export]
/// save_directory = "~/Pictures/Sketchboard"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial toolbar state and font
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Initial surface dimensions
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_size`: 1.0 - 50.0
    /// - `default_opacity`: 0.1 - 1.0
    /// - `text_scale`: 1.0 - 10.0
    /// - `surface.width` / `surface.height`: at least 1
    fn validate_and_clamp(&mut self) {
        // Size: 1.0 - 50.0
        if !(1.0..=50.0).contains(&self.drawing.default_size) {
            log::warn!(
                "Invalid default_size {:.1}, clamping to 1.0-50.0 range",
                self.drawing.default_size
            );
            self.drawing.default_size = self.drawing.default_size.clamp(1.0, 50.0);
        }

        // Opacity: 0.1 - 1.0
        if !(0.1..=1.0).contains(&self.drawing.default_opacity) {
            log::warn!(
                "Invalid default_opacity {:.2}, clamping to 0.1-1.0 range",
                self.drawing.default_opacity
            );
            self.drawing.default_opacity = self.drawing.default_opacity.clamp(0.1, 1.0);
        }

        // Text scale: 1.0 - 10.0
        if !(1.0..=10.0).contains(&self.drawing.text_scale) {
            log::warn!(
                "Invalid text_scale {:.1}, clamping to 1.0-10.0 range",
                self.drawing.text_scale
            );
            self.drawing.text_scale = self.drawing.text_scale.clamp(1.0, 10.0);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if self.surface.width < 1 || self.surface.height < 1 {
            log::warn!(
                "Invalid surface size {}x{}, clamping to at least 1x1",
                self.surface.width,
                self.surface.height
            );
            self.surface.width = self.surface.width.max(1);
            self.surface.height = self.surface.height.max(1);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`load`](Self::load), a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Writes the configuration as TOML to `config_path`.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editors and validation tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Toolbar state a new board starts with.
    pub fn tool_selection(&self) -> ToolSelection {
        ToolSelection {
            tool: self.drawing.default_tool,
            color: self.drawing.default_color.to_color(),
            size: self.drawing.default_size,
            opacity: self.drawing.default_opacity,
            brush_cap: self.drawing.default_brush_cap,
        }
    }

    /// Font used by the text tool.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor {
            scale: self.drawing.text_scale,
            ..FontDescriptor::new(
                self.drawing.font_family.clone(),
                self.drawing.font_weight.clone(),
                self.drawing.font_style.clone(),
            )
        }
    }

    /// Destination for [`crate::export::save_image`].
    pub fn file_save_config(&self) -> FileSaveConfig {
        FileSaveConfig {
            save_directory: expand_tilde(&self.export.save_directory),
            filename_template: self.export.filename_template.clone(),
            ..FileSaveConfig::default()
        }
    }
}
