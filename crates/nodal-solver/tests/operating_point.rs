//! Intersection search against the real well relations.

use nodal_models::{LinearInflow, PressureRelation, TubingOutflow};
use nodal_solver::{IntersectionProblem, NewtonConfig, Objective, find_intersection};
use proptest::prelude::*;

fn reference_well() -> (LinearInflow, TubingOutflow) {
    (
        LinearInflow::new(5000.0, 2000.0, 500.0),
        TubingOutflow::new(2.5, 64.0, 60.0, 2.0, 500.0, 8000.0, 100.0),
    )
}

#[test]
fn reference_well_crosses_inside_range() {
    let (ipr, vlp) = reference_well();
    let problem = IntersectionProblem::new(&ipr, &vlp);
    let config = NewtonConfig::default();

    let found = find_intersection(&problem, 1000.0, &config).unwrap();

    assert!(found.flow_rate > 0.0 && found.flow_rate < 2000.0);
    assert!((found.flow_rate - 391.0).abs() < 1.0, "q = {}", found.flow_rate);

    let gap = ipr.pressure(found.flow_rate).unwrap() - vlp.pressure(found.flow_rate).unwrap();
    assert!(gap.abs() <= config.abs_tol);
}

#[test]
fn repeated_solves_are_bit_identical() {
    let (ipr, vlp) = reference_well();
    let problem = IntersectionProblem::new(&ipr, &vlp);
    let config = NewtonConfig::default();

    let a = find_intersection(&problem, 1000.0, &config).unwrap();
    let b = find_intersection(&problem, 1000.0, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn surface_pressure_above_reservoir_reports_non_convergence() {
    let ipr = LinearInflow::new(5000.0, 2000.0, 500.0);
    let vlp = TubingOutflow::new(2.5, 64.0, 60.0, 2.0, 500.0, 8000.0, 6000.0);
    let problem = IntersectionProblem::new(&ipr, &vlp);

    let err = find_intersection(&problem, 1000.0, &NewtonConfig::default()).unwrap_err();
    assert!(err.is_non_convergence(), "unexpected error: {err}");
}

proptest! {
    #[test]
    fn converged_roots_meet_tolerance(
        pr in 1000.0f64..10_000.0,
        qmax in 100.0f64..10_000.0,
        frac in 0.0f64..0.9,
        depth in 1000.0f64..12_000.0,
        choke in 0.0f64..64.0,
        psurf in 0.0f64..500.0,
    ) {
        let ipr = LinearInflow::new(pr, qmax, pr * frac);
        let vlp = TubingOutflow::new(2.5, choke, 55.0, 2.0, 0.0, depth, psurf);
        let problem = IntersectionProblem::new(&ipr, &vlp);
        let config = NewtonConfig::default();

        if let Ok(found) = find_intersection(&problem, qmax / 2.0, &config) {
            prop_assert!(found.flow_rate >= 0.0);
            prop_assert!(problem.evaluate(found.raw_rate).unwrap().abs() <= config.abs_tol);
        }
    }
}
