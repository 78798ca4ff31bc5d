//! Core trait for pressure relations.

use crate::error::ModelResult;

/// A bottomhole pressure as a function of liquid flow rate.
///
/// Implementations are pure: the same rate always yields the same pressure,
/// so relations may be evaluated from several threads at once.
pub trait PressureRelation: Send + Sync {
    /// Relation name for logging and identification.
    fn name(&self) -> &str;

    /// Bottomhole pressure (psi) at flow rate `q` (BBL/D).
    ///
    /// Rates outside the physical range are evaluated as-is; root finders
    /// step through negative rates on their way to a solution.
    fn pressure(&self, q: f64) -> ModelResult<f64>;
}
