//! Analysis results as handed to front ends.

use crate::curves::Curve;
use crate::error::{AnalysisError, AnalysisResult};
use nodal_core::units::{
    bbl_per_day, ft, inches, lb_per_ft3, psi, to_kg_per_m3, to_kpa, to_m, to_m3_per_day,
};
use nodal_models::OutflowBreakdown;
use nodal_well::WellParameters;
use serde::Serialize;

/// Where the inflow and outflow relations meet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    /// Operating rate, never negative (BBL/D)
    pub flow_rate: f64,
    /// Inflow pressure at `flow_rate` (psi)
    pub pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingStatus {
    /// Rate within `[0, qmax]` and the raw root was non-negative
    InRange,
    /// Raw root was negative; the well does not flow
    ClampedToZero,
    /// Rate above the open-flow potential; the relations do not cross in range
    OutOfRange,
}

/// Required bottomhole pressure split into its terms at the operating rate (psi).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiftBreakdown {
    pub surface_psi: f64,
    pub choke_psi: f64,
    pub friction_psi: f64,
    pub hydrostatic_psi: f64,
}

impl From<OutflowBreakdown> for LiftBreakdown {
    fn from(b: OutflowBreakdown) -> Self {
        Self {
            surface_psi: b.surface,
            choke_psi: b.choke,
            friction_psi: b.friction,
            hydrostatic_psi: b.hydrostatic,
        }
    }
}

/// SI companions of the headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiSummary {
    pub flow_rate_m3_per_day: f64,
    pub pressure_kpa: f64,
    pub reservoir_pressure_kpa: f64,
    pub tubing_diameter_m: f64,
    pub well_depth_m: f64,
    pub fluid_density_kg_per_m3: f64,
}

impl SiSummary {
    pub fn new(params: &WellParameters, point: &OperatingPoint) -> Self {
        Self {
            flow_rate_m3_per_day: to_m3_per_day(bbl_per_day(point.flow_rate)),
            pressure_kpa: to_kpa(psi(point.pressure)),
            reservoir_pressure_kpa: to_kpa(psi(params.reservoir_pressure)),
            tubing_diameter_m: to_m(inches(params.tubing_diameter_in)),
            well_depth_m: to_m(ft(params.well_depth)),
            fluid_density_kg_per_m3: to_kg_per_m3(lb_per_ft3(params.fluid_density)),
        }
    }
}

/// Everything one analysis produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub params: WellParameters,
    pub operating_point: OperatingPoint,
    pub status: OperatingStatus,
    /// Root before the lower clamp (BBL/D)
    pub raw_rate: f64,
    /// |inflow - outflow| at `raw_rate` (psi)
    pub residual_psi: f64,
    pub iterations: usize,
    pub breakdown: LiftBreakdown,
    pub si: SiSummary,
    pub inflow_curve: Curve,
    pub outflow_curve: Curve,
}

impl AnalysisReport {
    pub fn is_out_of_range(&self) -> bool {
        self.status == OperatingStatus::OutOfRange
    }

    /// Turn an out-of-range annotation into an error.
    pub fn into_in_range(self) -> AnalysisResult<Self> {
        if self.is_out_of_range() {
            return Err(AnalysisError::OutOfRangeSolution {
                flow_rate: self.operating_point.flow_rate,
                max_flow_rate: self.params.max_flow_rate,
            });
        }
        Ok(self)
    }

    pub fn to_json(&self) -> AnalysisResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text summary for terminals.
    pub fn summary(&self) -> String {
        let p = &self.params;
        let op = &self.operating_point;
        let b = &self.breakdown;
        let mut out = String::new();
        out.push_str(&format!(
            "Calculated q = {:.1} BBL/D ({:.2} m3/d)\n",
            op.flow_rate, self.si.flow_rate_m3_per_day
        ));
        out.push_str(&format!(
            "  Bottomhole pressure: {:.1} psi ({:.1} kPa)\n",
            op.pressure, self.si.pressure_kpa
        ));
        out.push_str(&format!(
            "  Drawdown:            {:.1} psi\n",
            p.reservoir_pressure - op.pressure
        ));
        out.push_str(&format!(
            "  Productivity index:  {:.3} BBL/D/psi\n",
            p.inflow().productivity_index()
        ));
        out.push_str(&format!(
            "  Lift terms:          surface {:.1} + choke {:.1} + friction {:.1} + hydrostatic {:.1} psi\n",
            b.surface_psi, b.choke_psi, b.friction_psi, b.hydrostatic_psi
        ));
        out.push_str(&format!(
            "  Solver:              {} iterations, residual {:.3e} psi\n",
            self.iterations, self.residual_psi
        ));
        match self.status {
            OperatingStatus::InRange => {}
            OperatingStatus::ClampedToZero => out.push_str(&format!(
                "  Note: raw root {:.1} BBL/D was negative; the well does not flow\n",
                self.raw_rate
            )),
            OperatingStatus::OutOfRange => out.push_str(&format!(
                "  Warning: rate exceeds qmax = {:.1} BBL/D; no intersection in range\n",
                p.max_flow_rate
            )),
        }
        out
    }
}
