//! Error types for model evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating a pressure relation.
#[derive(Error, Debug, Clone)]
pub enum ModelError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::NonPhysical {
            what: "outflow pressure",
        };
        assert!(err.to_string().contains("outflow pressure"));
    }
}
