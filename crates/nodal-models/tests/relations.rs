//! Property tests for the inflow and outflow relations.

use nodal_models::{LinearInflow, PressureRelation, TubingOutflow, inflow_pressure};
use proptest::prelude::*;

fn inflow_strategy() -> impl Strategy<Value = LinearInflow> {
    (100.0f64..20_000.0, 1.0f64..50_000.0, 0.0f64..0.99).prop_map(|(pr, qmax, frac)| {
        LinearInflow::new(pr, qmax, pr * frac)
    })
}

fn outflow_strategy() -> impl Strategy<Value = TubingOutflow> {
    (
        0.5f64..8.0,
        0.0f64..128.0,
        30.0f64..80.0,
        0.1f64..100.0,
        0.0f64..5000.0,
        100.0f64..20_000.0,
        0.0f64..2000.0,
    )
        .prop_map(|(d, choke, rho, mu, gor, depth, psurf)| {
            TubingOutflow::new(d, choke, rho, mu, gor, depth, psurf)
        })
}

proptest! {
    #[test]
    fn inflow_hits_both_anchors(ipr in inflow_strategy()) {
        prop_assert_eq!(ipr.pressure(0.0).unwrap(), ipr.reservoir_pressure);
        prop_assert_eq!(ipr.pressure(ipr.max_flow_rate).unwrap(), ipr.min_flowing_pressure);
    }

    #[test]
    fn inflow_is_non_increasing(ipr in inflow_strategy(), a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = ipr.pressure(lo * ipr.max_flow_rate).unwrap();
        let p_hi = ipr.pressure(hi * ipr.max_flow_rate).unwrap();
        prop_assert!(p_hi <= p_lo);
    }

    #[test]
    fn outflow_is_non_decreasing(vlp in outflow_strategy(), a in 0.0f64..10_000.0, b in 0.0f64..10_000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(vlp.pressure(lo).unwrap() <= vlp.pressure(hi).unwrap());
    }

    #[test]
    fn outflow_never_below_static_terms(vlp in outflow_strategy(), q in 0.0f64..10_000.0) {
        let b = vlp.breakdown(q);
        prop_assert!(b.friction >= 0.0);
        prop_assert!(vlp.pressure(q).unwrap() >= b.surface + b.choke + b.hydrostatic);
    }
}

#[test]
fn struct_and_free_function_agree() {
    let ipr = LinearInflow::new(3200.0, 1500.0, 250.0);
    for q in [0.0, 10.0, 749.5, 1500.0] {
        assert_eq!(
            ipr.pressure(q).unwrap(),
            inflow_pressure(q, 3200.0, 1500.0, 250.0)
        );
    }
}
