//! Straight-line inflow performance relationship.

use crate::common::check_finite;
use crate::error::ModelResult;
use crate::traits::PressureRelation;

/// Bottomhole flowing pressure the reservoir sustains at rate `q`.
///
/// Linear decline from `reservoir_pressure` at zero rate to
/// `min_flowing_pressure` at `max_flow_rate`, i.e.
/// `Pr - (q / qmax) * (Pr - Pwf0)`. Evaluated as a weighted blend of the two
/// anchors so both endpoints are reproduced exactly. A zero `max_flow_rate`
/// is a precondition violation and must be rejected before calling.
#[inline]
pub fn inflow_pressure(
    q: f64,
    reservoir_pressure: f64,
    max_flow_rate: f64,
    min_flowing_pressure: f64,
) -> f64 {
    let t = q / max_flow_rate;
    reservoir_pressure * (1.0 - t) + min_flowing_pressure * t
}

/// Linear IPR with a fixed open-flow potential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearInflow {
    /// Static reservoir pressure (psi)
    pub reservoir_pressure: f64,
    /// Absolute open-flow potential (BBL/D)
    pub max_flow_rate: f64,
    /// Bottomhole pressure reached at `max_flow_rate` (psi)
    pub min_flowing_pressure: f64,
}

impl LinearInflow {
    pub fn new(reservoir_pressure: f64, max_flow_rate: f64, min_flowing_pressure: f64) -> Self {
        Self {
            reservoir_pressure,
            max_flow_rate,
            min_flowing_pressure,
        }
    }

    /// Productivity index, BBL/D per psi of drawdown.
    pub fn productivity_index(&self) -> f64 {
        self.max_flow_rate / (self.reservoir_pressure - self.min_flowing_pressure)
    }
}

impl PressureRelation for LinearInflow {
    fn name(&self) -> &str {
        "inflow"
    }

    fn pressure(&self, q: f64) -> ModelResult<f64> {
        let p = inflow_pressure(
            q,
            self.reservoir_pressure,
            self.max_flow_rate,
            self.min_flowing_pressure,
        );
        check_finite(p, "inflow pressure")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipr() -> LinearInflow {
        LinearInflow::new(5000.0, 2000.0, 500.0)
    }

    #[test]
    fn endpoints_are_exact() {
        let ipr = ipr();
        assert_eq!(ipr.pressure(0.0).unwrap(), 5000.0);
        assert_eq!(ipr.pressure(2000.0).unwrap(), 500.0);
    }

    #[test]
    fn open_flow_anchor_is_exact_for_awkward_pressures() {
        let ipr = LinearInflow::new(1.0, 2000.0, 0.1);
        assert_eq!(ipr.pressure(2000.0).unwrap(), 0.1);
        assert_eq!(ipr.pressure(0.0).unwrap(), 1.0);
    }

    #[test]
    fn midpoint_is_average() {
        assert_eq!(inflow_pressure(1000.0, 5000.0, 2000.0, 500.0), 2750.0);
    }

    #[test]
    fn extrapolates_past_open_flow() {
        // No clamping inside the relation; solvers may probe beyond qmax.
        let p = ipr().pressure(2200.0).unwrap();
        assert!((p - 50.0).abs() < 1e-9, "p = {p}");
    }

    #[test]
    fn productivity_index() {
        let pi = ipr().productivity_index();
        assert!((pi - 2000.0 / 4500.0).abs() < 1e-12);
    }

    #[test]
    fn zero_open_flow_is_non_physical() {
        let ipr = LinearInflow::new(5000.0, 0.0, 500.0);
        assert!(ipr.pressure(10.0).is_err());
    }
}
