//! nodal-well: well file format and input validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_parameters, validate_settings, validate_well_file};

use std::path::Path;

pub const LATEST_VERSION: u32 = 1;

pub type WellResult<T> = Result<T, WellError>;

#[derive(thiserror::Error, Debug)]
pub enum WellError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> WellResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(WellError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Load and validate a well file, choosing the format from the extension.
pub fn load(path: &Path) -> WellResult<WellFile> {
    match format_of(path)? {
        Format::Yaml => load_yaml(path),
        Format::Json => load_json(path),
    }
}

/// Validate and save a well file, choosing the format from the extension.
pub fn save(path: &Path, file: &WellFile) -> WellResult<()> {
    match format_of(path)? {
        Format::Yaml => save_yaml(path, file),
        Format::Json => save_json(path, file),
    }
}

pub fn load_yaml(path: &Path) -> WellResult<WellFile> {
    let content = std::fs::read_to_string(path)?;
    let file: WellFile = serde_yaml::from_str(&content)?;
    validate_well_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &WellFile) -> WellResult<()> {
    validate_well_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> WellResult<WellFile> {
    let content = std::fs::read_to_string(path)?;
    let file: WellFile = serde_json::from_str(&content)?;
    validate_well_file(&file)?;
    Ok(file)
}

pub fn save_json(path: &Path, file: &WellFile) -> WellResult<()> {
    validate_well_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}
