use symbio_compatibility::predict;
use symbio_core::models::{ConfidenceLevel, Outlook, Regime};

// ── Rule 1: strong cooperation ───────────────────────────────────────────

#[test]
fn high_potential_predicts_stable_cooperation_with_high_confidence() {
    let prediction = predict(0.35, 0.83, Some(0.88));
    assert_eq!(prediction.outlook, Outlook::StableCooperation);
    assert_eq!(prediction.confidence, ConfidenceLevel::High);
    assert_eq!(prediction.regime, Regime::Cooperative);
    let potential = prediction.cooperation_potential.unwrap();
    assert!((potential - 0.88 * 0.83).abs() < 1e-12);
}

#[test]
fn excellent_compatibility_without_sustainability_is_moderate_confidence() {
    let prediction = predict(0.5, 0.85, None);
    assert_eq!(prediction.outlook, Outlook::StableCooperation);
    assert_eq!(prediction.confidence, ConfidenceLevel::Moderate);
    assert!(prediction.cooperation_potential.is_none());
}

#[test]
fn good_compatibility_predicts_cooperation_likely() {
    let prediction = predict(0.5, 0.75, None);
    assert_eq!(prediction.outlook, Outlook::CooperationLikely);
    assert_eq!(prediction.confidence, ConfidenceLevel::Moderate);
}

#[test]
fn low_potential_downgrades_stable_cooperation() {
    // Potential 0.375 misses the 0.6 bar; compatibility 0.75 misses 0.8.
    let prediction = predict(0.5, 0.75, Some(0.5));
    assert_eq!(prediction.outlook, Outlook::CooperationLikely);
}

// ── Rule 2: moderate cooperation ─────────────────────────────────────────

#[test]
fn moderate_conditions_with_potential_predict_fluctuations() {
    let prediction = predict(0.85, 0.65, Some(0.9));
    assert_eq!(prediction.outlook, Outlook::CooperationWithFluctuations);
    assert_eq!(prediction.confidence, ConfidenceLevel::Moderate);
}

#[test]
fn moderate_conditions_without_potential_predict_possible_cooperation() {
    let prediction = predict(0.85, 0.65, None);
    assert_eq!(prediction.outlook, Outlook::CooperationPossible);
    assert_eq!(prediction.confidence, ConfidenceLevel::LowToModerate);
}

#[test]
fn factor_exactly_point_seven_falls_through_to_rule_two() {
    // Rule 1 requires i strictly below 0.7.
    let prediction = predict(0.7, 0.9, None);
    assert_eq!(prediction.outlook, Outlook::CooperationPossible);
}

// ── Rule 3: critical window ──────────────────────────────────────────────

#[test]
fn critical_window_with_low_compatibility_is_unstable() {
    let prediction = predict(0.95, 0.4, None);
    assert_eq!(prediction.outlook, Outlook::UnstableRegime);
    assert_eq!(prediction.confidence, ConfidenceLevel::Low);
}

#[test]
fn critical_window_above_one_is_unstable() {
    let prediction = predict(1.04, 0.9, None);
    assert_eq!(prediction.outlook, Outlook::UnstableRegime);
    assert_eq!(prediction.regime, Regime::Critical);
}

#[test]
fn cooperation_rules_preempt_the_critical_window() {
    // i = 0.95 sits inside the critical window, but rule 2 matches first
    // because compatibility clears its bar.
    let prediction = predict(0.95, 0.85, None);
    assert_eq!(prediction.outlook, Outlook::CooperationPossible);
}

// ── Rule 4: competition ──────────────────────────────────────────────────

#[test]
fn mild_competition_below_one_point_three() {
    let prediction = predict(1.15, 0.9, None);
    assert_eq!(prediction.outlook, Outlook::MildCompetition);
    assert_eq!(prediction.confidence, ConfidenceLevel::Moderate);
}

#[test]
fn strong_competition_at_and_above_one_point_three() {
    let at_bar = predict(1.3, 0.2, None);
    assert_eq!(at_bar.outlook, Outlook::StrongCompetition);
    assert_eq!(at_bar.confidence, ConfidenceLevel::High);

    let far_above = predict(1.6, 0.83, Some(0.88));
    assert_eq!(far_above.outlook, Outlook::StrongCompetition);
    assert_eq!(far_above.regime, Regime::Competitive);
}

// ── Rule 5: cooperation without the compatibility to use it ──────────────

#[test]
fn low_compatibility_cooperation_is_inefficient() {
    let prediction = predict(0.6, 0.4, None);
    assert_eq!(prediction.outlook, Outlook::InefficientCooperation);
    assert_eq!(prediction.confidence, ConfidenceLevel::Low);
}

// ── Record contents ──────────────────────────────────────────────────────

#[test]
fn prediction_carries_its_inputs() {
    let prediction = predict(0.35, 0.83, Some(0.88));
    assert_eq!(prediction.i_factor, 0.35);
    assert_eq!(prediction.compatibility, 0.83);
    assert_eq!(prediction.sustainability, Some(0.88));
}

#[test]
fn label_strings_match_the_published_set() {
    assert_eq!(
        predict(0.35, 0.83, Some(0.88)).outlook.to_string(),
        "Stable cooperation"
    );
    assert_eq!(
        predict(0.95, 0.4, None).outlook.to_string(),
        "Unstable regime (near critical point)"
    );
    assert_eq!(
        predict(0.85, 0.65, None).confidence.to_string(),
        "Low to Moderate"
    );
}
