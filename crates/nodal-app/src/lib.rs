//! Shared analysis service layer for the nodal workspace.
//!
//! This crate composes the well relations, the intersection solver and the
//! curve sampler into a single analysis entry point used by the CLI, and
//! owns the error taxonomy presented to callers.

pub mod analysis;
pub mod curves;
pub mod error;
pub mod report;
pub mod well_service;

// Re-export key types for convenience
pub use analysis::{
    AnalysisOptions, BatchOutcome, analyze, analyze_batch, batch_to_json, find_operating_rate,
};
pub use curves::{Curve, CurvePoint, curves_to_csv, curves_to_json, rate_axis, sample_curves};
pub use error::{AnalysisError, AnalysisResult};
pub use report::{AnalysisReport, LiftBreakdown, OperatingPoint, OperatingStatus, SiSummary};
pub use well_service::{load_well_file, select_well, write_template};
