//! Error types for the analysis service layer.

use nodal_models::ModelError;
use nodal_solver::SolverError;
use nodal_well::{ValidationError, WellError};

/// Recoverable analysis failures.
///
/// None of these abort the process; front ends decide how to present them.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Input constraint violation: {0}")]
    InputConstraintViolation(#[from] ValidationError),

    #[error("Solver did not converge: {reason}")]
    SolverNonConvergence { reason: String },

    #[error("Operating rate {flow_rate:.3} BBL/D lies outside [0, {max_flow_rate}] BBL/D")]
    OutOfRangeSolution { flow_rate: f64, max_flow_rate: f64 },

    #[error("Model evaluation failed: {0}")]
    Model(#[from] ModelError),

    #[error("Well file error: {0}")]
    WellFile(String),

    #[error("Well not found: {0}")]
    WellNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for nodal-app operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    /// Short machine-readable tag for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InputConstraintViolation(_) => "input_constraint_violation",
            AnalysisError::SolverNonConvergence { .. } => "solver_non_convergence",
            AnalysisError::OutOfRangeSolution { .. } => "out_of_range_solution",
            AnalysisError::Model(_) => "model",
            AnalysisError::WellFile(_) => "well_file",
            AnalysisError::WellNotFound(_) => "well_not_found",
            AnalysisError::Serialization(_) => "serialization",
            AnalysisError::Io(_) => "io",
        }
    }
}

impl From<SolverError> for AnalysisError {
    fn from(err: SolverError) -> Self {
        AnalysisError::SolverNonConvergence {
            reason: err.to_string(),
        }
    }
}

impl From<WellError> for AnalysisError {
    fn from(err: WellError) -> Self {
        match err {
            WellError::Validation(v) => AnalysisError::InputConstraintViolation(v),
            WellError::Io(e) => AnalysisError::Io(e),
            other => AnalysisError::WellFile(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_errors_become_non_convergence() {
        let err: AnalysisError = SolverError::ConvergenceFailed {
            what: "stalled".to_string(),
            iterations: 3,
        }
        .into();
        assert_eq!(err.kind(), "solver_non_convergence");
    }

    #[test]
    fn well_validation_keeps_its_kind() {
        let err: AnalysisError = WellError::Validation(ValidationError::NoWells).into();
        assert!(matches!(err, AnalysisError::InputConstraintViolation(_)));
    }
}
