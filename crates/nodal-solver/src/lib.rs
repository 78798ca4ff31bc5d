//! Operating-point solver for nodal analysis.
//!
//! This crate provides a Newton-based root finder and the intersection
//! problem built on it: the flow rate at which the inflow and outflow
//! relations of a well demand the same bottomhole pressure.

pub mod error;
pub mod intersection;
pub mod jacobian;
pub mod newton;
pub mod problem;

pub use error::{SolverError, SolverResult};
pub use intersection::{Intersection, find_intersection};
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
pub use problem::{IntersectionProblem, Objective};
