//! Single-seed intersection search.

use crate::error::{SolverError, SolverResult};
use crate::jacobian::central_difference_jacobian;
use crate::newton::{NewtonConfig, newton_solve};
use crate::problem::Objective;
use nalgebra::DVector;
use nodal_core::numeric::clamp_non_negative;

/// Root of an [`Objective`] interpreted as a flow rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Root as returned by the iteration, possibly negative
    pub raw_rate: f64,
    /// Root clamped to be non-negative
    pub flow_rate: f64,
    /// |objective| at the raw root
    pub residual: f64,
    /// Newton iterations used
    pub iterations: usize,
}

impl Intersection {
    /// True when the raw root was negative and the rate was lifted to zero.
    pub fn was_clamped(&self) -> bool {
        self.raw_rate < 0.0
    }
}

/// Find the zero of `objective` by Newton iteration from a single seed.
///
/// Returns whichever root the iteration reaches from `seed`; there is no
/// bracketing and no search for other roots. Only the lower bound is
/// enforced on the result, an upper limit is the caller's concern.
pub fn find_intersection(
    objective: &dyn Objective,
    seed: f64,
    config: &NewtonConfig,
) -> SolverResult<Intersection> {
    if !seed.is_finite() {
        return Err(SolverError::ProblemSetup {
            what: format!("initial guess must be finite, got {}", seed),
        });
    }

    let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
        Ok(DVector::from_element(1, objective.evaluate(x[0])?))
    };
    let jacobian = |x: &DVector<f64>| central_difference_jacobian(x, &residual, config.fd_epsilon);

    let result = newton_solve(DVector::from_element(1, seed), &residual, &jacobian, config)?;
    let raw_rate = result.x[0];

    tracing::debug!(
        seed,
        raw_rate,
        residual = result.residual_norm,
        iterations = result.iterations,
        "intersection converged"
    );

    Ok(Intersection {
        raw_rate,
        flow_rate: clamp_non_negative(raw_rate),
        residual: result.residual_norm,
        iterations: result.iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shifted(f64);

    impl Objective for Shifted {
        fn evaluate(&self, x: f64) -> SolverResult<f64> {
            Ok(self.0 - x)
        }
    }

    #[test]
    fn negative_root_is_clamped() {
        let found = find_intersection(&Shifted(-40.0), 100.0, &NewtonConfig::default()).unwrap();
        assert!((found.raw_rate + 40.0).abs() < 1e-6);
        assert_eq!(found.flow_rate, 0.0);
        assert!(found.was_clamped());
    }

    #[test]
    fn upper_side_is_not_clamped() {
        let config = NewtonConfig::default();
        let found = find_intersection(&Shifted(5000.0), 100.0, &config).unwrap();
        assert!(found.residual <= config.abs_tol);
        assert!((found.flow_rate - 5000.0).abs() < 1e-3);
        assert!(!found.was_clamped());
    }

    #[test]
    fn non_finite_seed_is_rejected() {
        let err = find_intersection(&Shifted(1.0), f64::NAN, &NewtonConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::ProblemSetup { .. }));
    }
}
