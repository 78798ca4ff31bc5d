//! Inflow/outflow curve sampling.
//!
//! Both relations are evaluated on one shared, uniformly spaced rate axis
//! spanning `[0, qmax]` so the curves can be plotted directly against each
//! other.

use crate::error::{AnalysisError, AnalysisResult};
use nodal_models::PressureRelation;
use nodal_well::{ValidationError, WellParameters, validate_parameters};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Flow rate (BBL/D)
    pub flow_rate: f64,
    /// Bottomhole pressure (psi)
    pub pressure: f64,
}

/// Ordered (rate, pressure) samples of one relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub name: String,
    pub points: Vec<CurvePoint>,
}

impl Curve {
    /// Evaluate `relation` at each rate of `axis`.
    pub fn sample(relation: &dyn PressureRelation, axis: &[f64]) -> AnalysisResult<Self> {
        let points = axis
            .iter()
            .map(|&q| -> AnalysisResult<CurvePoint> {
                Ok(CurvePoint {
                    flow_rate: q,
                    pressure: relation.pressure(q)?,
                })
            })
            .collect::<AnalysisResult<Vec<_>>>()?;

        Ok(Self {
            name: relation.name().to_string(),
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn flow_rates(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.flow_rate)
    }
}

/// `count` evenly spaced rates from 0 to `max_rate` inclusive.
///
/// The last point is pinned to `max_rate` exactly.
pub fn rate_axis(max_rate: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![0.0];
    }

    let mut points = Vec::with_capacity(count);
    let delta = max_rate / (count - 1) as f64;

    for i in 0..count {
        points.push(i as f64 * delta);
    }

    // Ensure exact endpoint
    points[count - 1] = max_rate;
    points
}

/// Sample the inflow and outflow relations of `params` over `[0, qmax]`.
///
/// Returns `(inflow_curve, outflow_curve)`, each of `sample_count` points on
/// the same rate axis.
pub fn sample_curves(params: &WellParameters, sample_count: usize) -> AnalysisResult<(Curve, Curve)> {
    validate_parameters(params)?;
    if sample_count < 2 {
        return Err(AnalysisError::InputConstraintViolation(
            ValidationError::InvalidValue {
                field: "sample_count".to_string(),
                value: sample_count.to_string(),
                reason: "must be at least 2".to_string(),
            },
        ));
    }

    let axis = rate_axis(params.max_flow_rate, sample_count);
    let inflow = Curve::sample(&params.inflow(), &axis)?;
    let outflow = Curve::sample(&params.outflow(), &axis)?;

    Ok((inflow, outflow))
}

/// Render both curves as CSV with one row per rate.
///
/// Assumes the curves share their rate axis, as produced by [`sample_curves`].
pub fn curves_to_csv(inflow: &Curve, outflow: &Curve) -> String {
    let mut csv = String::from("flow_rate_bbl_d,inflow_psi,outflow_psi\n");
    for (i, o) in inflow.points.iter().zip(&outflow.points) {
        csv.push_str(&format!("{},{},{}\n", i.flow_rate, i.pressure, o.pressure));
    }
    csv
}

/// Render both curves as a JSON object with `inflow` and `outflow` members.
pub fn curves_to_json(inflow: &Curve, outflow: &Curve) -> AnalysisResult<String> {
    #[derive(Serialize)]
    struct CurvePair<'a> {
        inflow: &'a Curve,
        outflow: &'a Curve,
    }

    Ok(serde_json::to_string_pretty(&CurvePair { inflow, outflow })?)
}
