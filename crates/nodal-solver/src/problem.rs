//! Root-finding problem definitions.

use crate::error::SolverResult;
use nodal_models::PressureRelation;

/// A scalar function whose zero is sought.
///
/// The solver only ever sees this interface; unit conversions and physical
/// constants stay inside the implementations.
pub trait Objective: Send + Sync {
    fn evaluate(&self, x: f64) -> SolverResult<f64>;
}

/// Pressure surplus of an inflow relation over an outflow relation.
///
/// `difference(q) = inflow(q) - outflow(q)`; the zero is the well's
/// operating rate.
#[derive(Clone, Copy)]
pub struct IntersectionProblem<'a> {
    pub inflow: &'a dyn PressureRelation,
    pub outflow: &'a dyn PressureRelation,
}

impl<'a> IntersectionProblem<'a> {
    pub fn new(inflow: &'a dyn PressureRelation, outflow: &'a dyn PressureRelation) -> Self {
        Self { inflow, outflow }
    }

    /// Inflow pressure minus outflow pressure (psi) at rate `q`.
    pub fn difference(&self, q: f64) -> SolverResult<f64> {
        Ok(self.inflow.pressure(q)? - self.outflow.pressure(q)?)
    }
}

impl Objective for IntersectionProblem<'_> {
    fn evaluate(&self, x: f64) -> SolverResult<f64> {
        self.difference(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodal_models::{LinearInflow, TubingOutflow};

    #[test]
    fn difference_at_zero_rate() {
        let ipr = LinearInflow::new(5000.0, 2000.0, 500.0);
        let vlp = TubingOutflow::new(2.5, 64.0, 60.0, 2.0, 500.0, 8000.0, 100.0);
        let problem = IntersectionProblem::new(&ipr, &vlp);

        let d = problem.evaluate(0.0).unwrap();
        assert!((d - (5000.0 - 4073.333_333)).abs() < 1e-3);
    }

    #[test]
    fn model_errors_propagate() {
        let ipr = LinearInflow::new(5000.0, 0.0, 500.0);
        let vlp = TubingOutflow::new(2.5, 64.0, 60.0, 2.0, 500.0, 8000.0, 100.0);
        let problem = IntersectionProblem::new(&ipr, &vlp);

        assert!(problem.difference(100.0).is_err());
    }
}
