use crate::NodalError;

/// Floating point type used throughout the workspace.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, NodalError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(NodalError::NonFinite { what, value: v })
    }
}

/// Clamp a flow rate to the physical lower bound of zero.
///
/// NaN passes through unchanged so that callers still see the bad value.
pub fn clamp_non_negative(v: Real) -> Real {
    if v < 0.0 { 0.0 } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn clamp_non_negative_edges() {
        assert_eq!(clamp_non_negative(-3.5), 0.0);
        assert_eq!(clamp_non_negative(0.0), 0.0);
        assert_eq!(clamp_non_negative(12.0), 12.0);
        assert!(clamp_non_negative(Real::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn clamp_never_negative(v in -1e9f64..1e9) {
            prop_assert!(clamp_non_negative(v) >= 0.0);
        }
    }
}
