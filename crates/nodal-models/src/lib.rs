//! nodal-models: pressure/flow-rate relations for a producing well.
//!
//! Provides the two relations of a nodal analysis at the bottomhole node:
//! - Inflow (IPR): pressure the reservoir can sustain at a given rate
//! - Outflow (VLP): pressure the tubing and choke require to lift that rate
//!
//! Both implement [`PressureRelation`] and are deterministic functions of
//! flow rate and parameters, suitable for root finding and curve sampling.
//!
//! # Example
//!
//! ```
//! use nodal_models::{LinearInflow, PressureRelation, TubingOutflow};
//!
//! let ipr = LinearInflow::new(5000.0, 2000.0, 500.0);
//! let vlp = TubingOutflow::new(2.5, 64.0, 60.0, 2.0, 500.0, 8000.0, 100.0);
//!
//! let q = 400.0;
//! let surplus = ipr.pressure(q).unwrap() - vlp.pressure(q).unwrap();
//! assert!(surplus.abs() < 50.0);
//! ```

pub mod common;
pub mod constants;
pub mod error;
pub mod inflow;
pub mod outflow;
pub mod traits;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use inflow::{LinearInflow, inflow_pressure};
pub use outflow::{OutflowBreakdown, TubingOutflow, outflow_pressure};
pub use traits::PressureRelation;
