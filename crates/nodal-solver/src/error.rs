//! Error types for solver operations.

use nodal_models::ModelError;
use thiserror::Error;

/// Errors that can occur while locating a root.
#[derive(Error, Debug, Clone)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Convergence failed after {iterations} iterations: {what}")]
    ConvergenceFailed { what: String, iterations: usize },

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    /// True for failures of the iteration itself, as opposed to a malformed
    /// problem. Model errors count: they only arise once an iterate has
    /// wandered somewhere the relations cannot be evaluated.
    pub fn is_non_convergence(&self) -> bool {
        !matches!(self, SolverError::ProblemSetup { .. })
    }
}
