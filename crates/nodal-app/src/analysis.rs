//! Analysis entry points.

use crate::curves::sample_curves;
use crate::error::{AnalysisError, AnalysisResult};
use crate::report::{AnalysisReport, OperatingPoint, OperatingStatus, SiSummary};
use nodal_models::PressureRelation;
use nodal_solver::{Intersection, IntersectionProblem, NewtonConfig, find_intersection};
use nodal_well::{
    AnalysisSettings, ValidationError, WellDef, WellParameters, validate_parameters,
    validate_settings,
};
use rayon::prelude::*;
use serde::Serialize;

/// Knobs of one analysis run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub sample_count: usize,
    pub solver: NewtonConfig,
}

impl AnalysisOptions {
    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self {
            sample_count: settings.sample_count,
            solver: NewtonConfig {
                max_iterations: settings.solver.max_iterations,
                abs_tol: settings.solver.tolerance_psi,
                fd_epsilon: settings.solver.derivative_step,
                ..NewtonConfig::default()
            },
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_settings(&AnalysisSettings {
            sample_count: self.sample_count,
            solver: nodal_well::SolverSettings {
                tolerance_psi: self.solver.abs_tol,
                max_iterations: self.solver.max_iterations,
                derivative_step: self.solver.fd_epsilon,
            },
        })
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::from_settings(&AnalysisSettings::default())
    }
}

/// Operating rate of the well described by `params`.
///
/// Newton iteration on `inflow(q) - outflow(q)` seeded at `qmax / 2`; the
/// result is clamped to be non-negative but not limited to `qmax`. Both the
/// parameters and the options are validated first.
pub fn find_operating_rate(
    params: &WellParameters,
    options: &AnalysisOptions,
) -> AnalysisResult<Intersection> {
    validate_parameters(params)?;
    options.validate()?;

    let inflow = params.inflow();
    let outflow = params.outflow();
    let problem = IntersectionProblem::new(&inflow, &outflow);
    let seed = params.max_flow_rate / 2.0;

    Ok(find_intersection(&problem, seed, &options.solver)?)
}

/// Full analysis: operating point plus both sampled curves.
pub fn analyze(params: &WellParameters, options: &AnalysisOptions) -> AnalysisResult<AnalysisReport> {
    let intersection = find_operating_rate(params, options)?;
    let flow_rate = intersection.flow_rate;

    let status = if intersection.was_clamped() {
        OperatingStatus::ClampedToZero
    } else if flow_rate > params.max_flow_rate {
        OperatingStatus::OutOfRange
    } else {
        OperatingStatus::InRange
    };

    match status {
        OperatingStatus::OutOfRange => tracing::warn!(
            flow_rate,
            max_flow_rate = params.max_flow_rate,
            "operating rate exceeds open-flow potential"
        ),
        OperatingStatus::ClampedToZero => tracing::warn!(
            raw_rate = intersection.raw_rate,
            "negative operating rate clamped to zero"
        ),
        OperatingStatus::InRange => {}
    }

    let operating_point = OperatingPoint {
        flow_rate,
        pressure: params.inflow().pressure(flow_rate)?,
    };
    let (inflow_curve, outflow_curve) = sample_curves(params, options.sample_count)?;

    tracing::info!(
        flow_rate,
        pressure = operating_point.pressure,
        iterations = intersection.iterations,
        "nodal analysis complete"
    );

    Ok(AnalysisReport {
        params: *params,
        operating_point,
        status,
        raw_rate: intersection.raw_rate,
        residual_psi: intersection.residual,
        iterations: intersection.iterations,
        breakdown: params.outflow().breakdown(flow_rate).into(),
        si: SiSummary::new(params, &operating_point),
        inflow_curve,
        outflow_curve,
    })
}

/// Result of one well in a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub result: AnalysisResult<AnalysisReport>,
}

/// Analyse every well independently, in parallel, keeping input order.
///
/// A failure in one well is recorded in its outcome and does not affect
/// the others.
pub fn analyze_batch(wells: &[WellDef], options: &AnalysisOptions) -> Vec<BatchOutcome> {
    wells
        .par_iter()
        .map(|well| {
            let result = analyze(&well.params, options);
            if let Err(err) = &result {
                tracing::warn!(well = %well.name, error = %err, "well analysis failed");
            }
            BatchOutcome {
                name: well.name.clone(),
                result,
            }
        })
        .collect()
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        self.result.as_ref().err()
    }
}

/// Render batch outcomes as a JSON array, one object per well.
pub fn batch_to_json(outcomes: &[BatchOutcome]) -> AnalysisResult<String> {
    #[derive(Serialize)]
    struct FailureRow {
        kind: &'static str,
        message: String,
    }

    #[derive(Serialize)]
    struct BatchRow<'a> {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        report: Option<&'a AnalysisReport>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<FailureRow>,
    }

    let rows: Vec<BatchRow<'_>> = outcomes
        .iter()
        .map(|outcome| BatchRow {
            name: &outcome.name,
            report: outcome.result.as_ref().ok(),
            error: outcome.error().map(|err| FailureRow {
                kind: err.kind(),
                message: err.to_string(),
            }),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
