//! nodal-core: shared foundation for the nodal analysis workspace.
//!
//! Contains:
//! - units (oilfield conversion constants + uom companions for reporting)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::NodalError;
pub use numeric::*;
pub use units::*;
