//! Well parameter and well file validation.

use crate::schema::{AnalysisSettings, WellFile, WellParameters};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate well name: {name}")]
    DuplicateName { name: String },

    #[error("Well file contains no wells")]
    NoWells,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be > 0"))
    }
}

fn require_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be >= 0"))
    }
}

/// Check every field against its physical domain.
///
/// Nothing is coerced: the first violation is returned as-is.
pub fn validate_parameters(params: &WellParameters) -> Result<(), ValidationError> {
    for (field, value) in params.fields() {
        if !value.is_finite() {
            return Err(invalid(field, value, "must be finite"));
        }
    }

    require_positive("reservoir_pressure", params.reservoir_pressure)?;
    require_positive("max_flow_rate", params.max_flow_rate)?;
    require_non_negative("min_flowing_pressure", params.min_flowing_pressure)?;
    if params.min_flowing_pressure >= params.reservoir_pressure {
        return Err(invalid(
            "min_flowing_pressure",
            params.min_flowing_pressure,
            "must be below reservoir_pressure",
        ));
    }
    require_positive("tubing_diameter_in", params.tubing_diameter_in)?;
    require_non_negative("choke_size", params.choke_size)?;
    require_positive("fluid_density", params.fluid_density)?;
    require_positive("viscosity", params.viscosity)?;
    require_non_negative("gor", params.gor)?;
    require_positive("well_depth", params.well_depth)?;
    require_non_negative("surface_pressure", params.surface_pressure)?;

    Ok(())
}

pub fn validate_settings(settings: &AnalysisSettings) -> Result<(), ValidationError> {
    if settings.sample_count < 2 {
        return Err(ValidationError::InvalidValue {
            field: "sample_count".to_string(),
            value: settings.sample_count.to_string(),
            reason: "must be at least 2".to_string(),
        });
    }
    let solver = &settings.solver;
    if !(solver.tolerance_psi.is_finite() && solver.tolerance_psi > 0.0) {
        return Err(invalid(
            "solver.tolerance_psi",
            solver.tolerance_psi,
            "must be finite and > 0",
        ));
    }
    if solver.max_iterations == 0 {
        return Err(ValidationError::InvalidValue {
            field: "solver.max_iterations".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if !(solver.derivative_step.is_finite() && solver.derivative_step > 0.0) {
        return Err(invalid(
            "solver.derivative_step",
            solver.derivative_step,
            "must be finite and > 0",
        ));
    }
    Ok(())
}

pub fn validate_well_file(file: &WellFile) -> Result<(), ValidationError> {
    if file.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    validate_settings(&file.settings)?;

    if file.wells.is_empty() {
        return Err(ValidationError::NoWells);
    }

    let mut names = HashSet::new();
    for well in &file.wells {
        if !names.insert(&well.name) {
            return Err(ValidationError::DuplicateName {
                name: well.name.clone(),
            });
        }
        validate_parameters(&well.params).map_err(|e| match e {
            ValidationError::InvalidValue {
                field,
                value,
                reason,
            } => ValidationError::InvalidValue {
                field: format!("{}.{}", well.name, field),
                value,
                reason,
            },
            other => other,
        })?;
    }

    Ok(())
}
