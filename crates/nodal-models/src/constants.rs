//! Empirical constants of the simplified outflow relation.

/// Friction-factor proxy applied to the velocity head term.
///
/// Numerically equal to the Blasius coefficient but applied without a
/// Reynolds-number dependence; it is not a Darcy or Fanning correlation.
pub const FRICTION_COEFFICIENT: f64 = 0.3164;

/// Choke pressure drop per unit of bean size, psi per 64th of an inch.
pub const CHOKE_PSI_PER_64TH: f64 = 10.0;
