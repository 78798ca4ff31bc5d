//! Newton solver with backtracking line search.

use crate::error::{SolverError, SolverResult};
use nalgebra::{DMatrix, DVector};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual norm (psi for intersections)
    pub abs_tol: f64,
    /// Relative step for finite-difference derivatives
    pub fd_epsilon: f64,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-3,
            fd_epsilon: 1e-6,
            line_search_beta: 0.5,
            max_line_search_iters: 30,
        }
    }
}

/// Newton iteration result.
#[derive(Debug, Clone)]
pub struct NewtonResult {
    /// Solution vector
    pub x: DVector<f64>,
    /// Final residual norm
    pub residual_norm: f64,
    /// Number of iterations
    pub iterations: usize,
}

/// Newton solver with line search.
///
/// Iterates are unconstrained: they may leave the physical domain on the way
/// to a root. The step is halved until the residual norm decreases; if no
/// reduction is found the solve fails rather than accepting a worse point.
pub fn newton_solve<F, J>(
    x0: DVector<f64>,
    residual_fn: F,
    jacobian_fn: J,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: Fn(&DVector<f64>) -> SolverResult<DVector<f64>>,
    J: Fn(&DVector<f64>) -> SolverResult<DMatrix<f64>>,
{
    let mut x = x0;
    let mut r = residual_fn(&x)?;
    let mut r_norm = r.norm();

    if !r_norm.is_finite() {
        return Err(SolverError::Numeric {
            what: "residual is not finite at the initial guess".to_string(),
        });
    }

    for iter in 0..config.max_iterations {
        if r_norm <= config.abs_tol {
            return Ok(NewtonResult {
                x,
                residual_norm: r_norm,
                iterations: iter,
            });
        }

        let jac = jacobian_fn(&x)?;

        // Solve J * dx = -r
        let dx = jac
            .lu()
            .solve(&(-r.clone()))
            .ok_or_else(|| SolverError::Numeric {
                what: format!("Jacobian is singular at iteration {}", iter),
            })?;

        if dx.iter().any(|v| !v.is_finite()) {
            return Err(SolverError::Numeric {
                what: format!("Newton step is not finite at iteration {}", iter),
            });
        }

        let mut alpha = 1.0;
        let mut x_new = &x + &dx;
        let mut r_new = residual_fn(&x_new)?;
        let mut r_new_norm = r_new.norm();

        for _ in 0..config.max_line_search_iters {
            if r_new_norm < r_norm {
                break;
            }

            // Backtrack
            alpha *= config.line_search_beta;
            x_new = &x + alpha * &dx;
            r_new = residual_fn(&x_new)?;
            r_new_norm = r_new.norm();
        }

        if !(r_new_norm < r_norm) {
            return Err(SolverError::ConvergenceFailed {
                what: format!(
                    "Line search stagnated at iteration {}, residual = {}",
                    iter, r_norm
                ),
                iterations: iter,
            });
        }

        tracing::trace!(
            iteration = iter,
            alpha,
            residual = r_new_norm,
            "newton step accepted"
        );

        x = x_new;
        r = r_new;
        r_norm = r_new_norm;
    }

    if r_norm <= config.abs_tol {
        return Ok(NewtonResult {
            x,
            residual_norm: r_norm,
            iterations: config.max_iterations,
        });
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "Maximum iterations {} reached, residual = {}",
            config.max_iterations, r_norm
        ),
        iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_minus_four(x: &DVector<f64>) -> SolverResult<DVector<f64>> {
        Ok(DVector::from_element(1, x[0] * x[0] - 4.0))
    }

    fn square_jacobian(x: &DVector<f64>) -> SolverResult<DMatrix<f64>> {
        Ok(DMatrix::from_element(1, 1, 2.0 * x[0]))
    }

    #[test]
    fn simple_quadratic() {
        let x0 = DVector::from_element(1, 3.0);
        let config = NewtonConfig {
            abs_tol: 1e-10,
            ..NewtonConfig::default()
        };
        let result = newton_solve(x0, square_minus_four, square_jacobian, &config).unwrap();

        assert!(result.residual_norm <= config.abs_tol);
        assert!((result.x[0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn converged_guess_takes_no_iterations() {
        let x0 = DVector::from_element(1, 2.0);
        let result = newton_solve(
            x0,
            square_minus_four,
            square_jacobian,
            &NewtonConfig::default(),
        )
        .unwrap();
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn zero_derivative_is_reported() {
        let x0 = DVector::from_element(1, 0.0);
        let err = newton_solve(
            x0,
            square_minus_four,
            square_jacobian,
            &NewtonConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::Numeric { .. }));
    }

    #[test]
    fn no_real_root_fails_without_panicking() {
        // x^2 + 1 has no real root; Newton stalls near the vertex.
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_element(1, x[0] * x[0] + 1.0))
        };
        let x0 = DVector::from_element(1, 3.0);
        let err = newton_solve(x0, residual, square_jacobian, &NewtonConfig::default())
            .unwrap_err();
        assert!(err.is_non_convergence());
    }

    #[test]
    fn iteration_budget_is_respected() {
        let x0 = DVector::from_element(1, 1.0e6);
        let config = NewtonConfig {
            max_iterations: 2,
            abs_tol: 1e-12,
            ..NewtonConfig::default()
        };
        let err = newton_solve(x0, square_minus_four, square_jacobian, &config).unwrap_err();
        assert!(matches!(
            err,
            SolverError::ConvergenceFailed { iterations: 2, .. }
        ));
    }
}
