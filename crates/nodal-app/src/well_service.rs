//! Well file loading, selection, and template output.

use std::path::Path;

use crate::error::{AnalysisError, AnalysisResult};
use nodal_well::{WellDef, WellFile, WellParameters};

/// Load and validate a well file (YAML or JSON by extension).
pub fn load_well_file(path: &Path) -> AnalysisResult<WellFile> {
    Ok(nodal_well::load(path)?)
}

/// Pick a well by name, or the first well when no name is given.
pub fn select_well<'a>(file: &'a WellFile, name: Option<&str>) -> AnalysisResult<&'a WellDef> {
    match name {
        Some(name) => file
            .well(name)
            .ok_or_else(|| AnalysisError::WellNotFound(name.to_string())),
        None => file
            .wells
            .first()
            .ok_or_else(|| AnalysisError::WellNotFound("<first>".to_string())),
    }
}

/// Write a single-well file pre-filled with default parameters.
pub fn write_template(path: &Path) -> AnalysisResult<()> {
    let file = WellFile::single("example", WellParameters::default());
    Ok(nodal_well::save(path, &file)?)
}
