//! Common utilities for model calculations.

use crate::error::{ModelError, ModelResult};
use nodal_core::numeric::ensure_finite;

/// Ensure a value is finite, returning ModelError if not.
pub fn check_finite(value: f64, what: &'static str) -> ModelResult<f64> {
    ensure_finite(value, what).map_err(|_| ModelError::NonPhysical { what })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert_eq!(check_finite(1.0, "test").unwrap(), 1.0);
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }
}
