//! Simplified vertical lift performance through tubing and a surface choke.

use crate::common::check_finite;
use crate::constants::{CHOKE_PSI_PER_64TH, FRICTION_COEFFICIENT};
use crate::error::ModelResult;
use crate::traits::PressureRelation;
use nodal_core::units::constants::{FT3_PER_BBL, IN_PER_FT, SECONDS_PER_DAY, SQ_IN_PER_SQ_FT};

/// Bottomhole pressure required to lift rate `q` to surface.
///
/// `gor` is accepted but does not enter the relation; see [`TubingOutflow`].
#[allow(clippy::too_many_arguments)]
pub fn outflow_pressure(
    q: f64,
    tubing_diameter_in: f64,
    choke_size: f64,
    fluid_density: f64,
    viscosity: f64,
    gor: f64,
    well_depth: f64,
    surface_pressure: f64,
) -> f64 {
    TubingOutflow::new(
        tubing_diameter_in,
        choke_size,
        fluid_density,
        viscosity,
        gor,
        well_depth,
        surface_pressure,
    )
    .breakdown(q)
    .total()
}

/// Pressure contributions making up the required bottomhole pressure (psi).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutflowBreakdown {
    pub surface: f64,
    pub choke: f64,
    pub friction: f64,
    pub hydrostatic: f64,
}

impl OutflowBreakdown {
    /// Sum of all terms, in the order surface, choke, friction, hydrostatic.
    pub fn total(&self) -> f64 {
        self.surface + self.choke + self.friction + self.hydrostatic
    }
}

/// Single-phase liquid lift through a vertical tubing string.
///
/// Friction uses a constant coefficient on the velocity head and the choke
/// drop is linear in bean size. The gas-oil ratio is carried so callers can
/// report it, but no multiphase correction is applied: the relation behaves
/// identically for any `gor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubingOutflow {
    /// Tubing inner diameter (in)
    pub tubing_diameter_in: f64,
    /// Choke bean size (64ths of an inch)
    pub choke_size: f64,
    /// Liquid density (lb/ft³)
    pub fluid_density: f64,
    /// Liquid viscosity (cp)
    pub viscosity: f64,
    /// Gas-oil ratio (unused)
    pub gor: f64,
    /// Measured depth (ft)
    pub well_depth: f64,
    /// Required wellhead pressure (psi)
    pub surface_pressure: f64,
}

impl TubingOutflow {
    pub fn new(
        tubing_diameter_in: f64,
        choke_size: f64,
        fluid_density: f64,
        viscosity: f64,
        gor: f64,
        well_depth: f64,
        surface_pressure: f64,
    ) -> Self {
        Self {
            tubing_diameter_in,
            choke_size,
            fluid_density,
            viscosity,
            gor,
            well_depth,
            surface_pressure,
        }
    }

    /// Tubing inner diameter in feet.
    pub fn diameter_ft(&self) -> f64 {
        self.tubing_diameter_in / IN_PER_FT
    }

    /// Open cross-section of the tubing (ft²).
    pub fn flow_area_ft2(&self) -> f64 {
        let d = self.diameter_ft();
        std::f64::consts::PI * (d / 2.0).powi(2)
    }

    /// Mean liquid velocity (ft/s) at rate `q` (BBL/D).
    pub fn velocity_ft_s(&self, q: f64) -> f64 {
        q * FT3_PER_BBL / (SECONDS_PER_DAY * self.flow_area_ft2())
    }

    /// Static head of the liquid column (psi). Independent of rate.
    pub fn hydrostatic_head(&self) -> f64 {
        self.fluid_density * self.well_depth / SQ_IN_PER_SQ_FT
    }

    /// Choke pressure drop (psi). Independent of rate.
    pub fn choke_drop(&self) -> f64 {
        self.choke_size * CHOKE_PSI_PER_64TH
    }

    /// Tubing friction loss (psi) at rate `q`.
    pub fn friction_drop(&self, q: f64) -> f64 {
        let v = self.velocity_ft_s(q);
        FRICTION_COEFFICIENT * v.powi(2) * self.viscosity / (2.0 * self.diameter_ft())
            * self.well_depth
            / SQ_IN_PER_SQ_FT
    }

    /// Per-term pressure contributions at rate `q`.
    pub fn breakdown(&self, q: f64) -> OutflowBreakdown {
        OutflowBreakdown {
            surface: self.surface_pressure,
            choke: self.choke_drop(),
            friction: self.friction_drop(q),
            hydrostatic: self.hydrostatic_head(),
        }
    }
}

impl PressureRelation for TubingOutflow {
    fn name(&self) -> &str {
        "outflow"
    }

    fn pressure(&self, q: f64) -> ModelResult<f64> {
        check_finite(self.breakdown(q).total(), "outflow pressure")
    }
}
