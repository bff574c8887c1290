//! Saving encoded drawings: timestamped files and `data:` URLs.

use crate::draw::ImageFormat;
use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save drawings to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Encoding of the bytes being saved; selects the extension.
    pub format: ImageFormat,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Sketchboard"),
            filename_template: "drawing".to_string(),
            format: ImageFormat::Png,
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// A template without format specifiers is used as-is, so `"drawing"` yields `drawing.png`.
pub fn generate_filename(template: &str, format: ImageFormat) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format.extension())
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path to the directory.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf> {
    if !directory.exists() {
        log::info!("Creating save directory: {}", directory.display());
        fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create {}", directory.display()))?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded image bytes under a generated filename.
///
/// Returns the path of the written file.
pub fn save_image(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf> {
    let directory = ensure_directory_exists(&config.save_directory)?;

    let filename = generate_filename(&config.filename_template, config.format);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}

/// Wraps encoded bytes in a `data:<mime>;base64,` URL.
pub fn to_data_url(image_data: &[u8], format: ImageFormat) -> String {
    format!(
        "data:{};base64,{}",
        format.mime_type(),
        STANDARD.encode(image_data)
    )
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
