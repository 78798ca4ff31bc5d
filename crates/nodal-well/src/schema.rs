//! Well file schema definitions.

use nodal_models::{LinearInflow, TubingOutflow};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SAMPLE_COUNT: usize = 100;
pub const DEFAULT_TOLERANCE_PSI: f64 = 1e-3;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_DERIVATIVE_STEP: f64 = 1e-6;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellFile {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub settings: AnalysisSettings,
    #[serde(default)]
    pub wells: Vec<WellDef>,
}

impl WellFile {
    /// A file holding a single well with the given parameters.
    pub fn single(name: impl Into<String>, params: WellParameters) -> Self {
        let name = name.into();
        Self {
            version: crate::LATEST_VERSION,
            name: name.clone(),
            settings: AnalysisSettings::default(),
            wells: vec![WellDef { name, params }],
        }
    }

    pub fn well(&self, name: &str) -> Option<&WellDef> {
        self.wells.iter().find(|w| w.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellDef {
    pub name: String,
    #[serde(flatten)]
    pub params: WellParameters,
}

/// Inputs of one nodal analysis, in oilfield units.
///
/// Omitted fields take the values of [`WellParameters::default`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WellParameters {
    /// Static reservoir pressure (psi)
    pub reservoir_pressure: f64,
    /// Absolute open-flow potential (BBL/D)
    pub max_flow_rate: f64,
    /// Bottomhole pressure at `max_flow_rate` (psi)
    pub min_flowing_pressure: f64,
    /// Tubing inner diameter (in)
    pub tubing_diameter_in: f64,
    /// Choke bean size (64ths of an inch)
    pub choke_size: f64,
    /// Fluid density (lb/ft³)
    pub fluid_density: f64,
    /// Fluid viscosity (cp)
    pub viscosity: f64,
    /// Gas-oil ratio (scf/STB). Carried through, not used by the outflow relation.
    pub gor: f64,
    /// Measured depth (ft)
    pub well_depth: f64,
    /// Required wellhead pressure (psi)
    pub surface_pressure: f64,
}

impl Default for WellParameters {
    fn default() -> Self {
        Self {
            reservoir_pressure: 5000.0,
            max_flow_rate: 2000.0,
            min_flowing_pressure: 500.0,
            tubing_diameter_in: 2.5,
            choke_size: 64.0,
            fluid_density: 60.0,
            viscosity: 2.0,
            gor: 500.0,
            well_depth: 8000.0,
            surface_pressure: 100.0,
        }
    }
}

impl WellParameters {
    pub fn inflow(&self) -> LinearInflow {
        LinearInflow::new(
            self.reservoir_pressure,
            self.max_flow_rate,
            self.min_flowing_pressure,
        )
    }

    pub fn outflow(&self) -> TubingOutflow {
        TubingOutflow::new(
            self.tubing_diameter_in,
            self.choke_size,
            self.fluid_density,
            self.viscosity,
            self.gor,
            self.well_depth,
            self.surface_pressure,
        )
    }

    /// Field names and values in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("reservoir_pressure", self.reservoir_pressure),
            ("max_flow_rate", self.max_flow_rate),
            ("min_flowing_pressure", self.min_flowing_pressure),
            ("tubing_diameter_in", self.tubing_diameter_in),
            ("choke_size", self.choke_size),
            ("fluid_density", self.fluid_density),
            ("viscosity", self.viscosity),
            ("gor", self.gor),
            ("well_depth", self.well_depth),
            ("surface_pressure", self.surface_pressure),
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSettings {
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    #[serde(default)]
    pub solver: SolverSettings,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            solver: SolverSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SolverSettings {
    #[serde(default = "default_tolerance_psi")]
    pub tolerance_psi: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_derivative_step")]
    pub derivative_step: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance_psi: DEFAULT_TOLERANCE_PSI,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            derivative_step: DEFAULT_DERIVATIVE_STEP,
        }
    }
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_tolerance_psi() -> f64 {
    DEFAULT_TOLERANCE_PSI
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_derivative_step() -> f64 {
    DEFAULT_DERIVATIVE_STEP
}
