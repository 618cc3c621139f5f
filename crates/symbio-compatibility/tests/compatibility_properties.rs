use proptest::prelude::*;

use symbio_compatibility::estimate_compatibility;
use symbio_core::config::DimensionWeights;

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

// Weights that always satisfy the sum contract.
fn valid_weights() -> impl Strategy<Value = DimensionWeights> {
    (0.05f64..=0.9, 0.05f64..=0.9).prop_filter_map(
        "weights must leave room for the third dimension",
        |(physical, service)| {
            let temporal = 1.0 - physical - service;
            (temporal >= 0.0).then(|| DimensionWeights::new(physical, service, temporal))
        },
    )
}

proptest! {
    #[test]
    fn compatibility_is_the_weighted_sum(
        physical in unit(),
        service in unit(),
        temporal in unit(),
        weights in valid_weights(),
    ) {
        let result =
            estimate_compatibility(physical, service, temporal, None, Some(weights))
                .unwrap();
        let expected = weights.physical * physical
            + weights.service * service
            + weights.temporal * temporal;
        prop_assert!((result.compatibility - expected).abs() < 1e-12);
        prop_assert!(result.compatibility >= -1e-12 && result.compatibility <= 1.0 + 1e-12);
    }
}

proptest! {
    #[test]
    fn raising_a_dimension_never_lowers_compatibility(
        physical in unit(),
        service in unit(),
        temporal in unit(),
        bump in 0.0f64..=0.3,
        weights in valid_weights(),
    ) {
        let base = estimate_compatibility(physical, service, temporal, None, Some(weights))
            .unwrap()
            .compatibility;
        let raised = (service + bump).min(1.0);
        let bumped = estimate_compatibility(physical, raised, temporal, None, Some(weights))
            .unwrap()
            .compatibility;
        prop_assert!(bumped >= base - 1e-12);
    }
}

proptest! {
    #[test]
    fn cooperation_potential_is_sustainability_times_compatibility(
        physical in unit(),
        service in unit(),
        temporal in unit(),
        sustainability in unit(),
    ) {
        let result =
            estimate_compatibility(physical, service, temporal, Some(sustainability), None)
                .unwrap();
        let potential = result.cooperation_potential.unwrap();
        prop_assert!((potential - sustainability * result.compatibility).abs() < 1e-12);
    }
}
