//! Integration tests for treatment application.
//!
//! Each test sets up a lobule, injects one or more doses, and checks the
//! dose-response rules: receptor match, affinity gate, receptor/action
//! effect, toxicity and clamping.

use biotwin::{
    Action, Intervention, TargetProfile, TissueModel, TissueState, TreatmentOutcome,
};

fn dose(receptor: &str, action: Action, affinity: f64) -> Intervention {
    Intervention::new("MKTAYIAKQRQISFVKSHFSRQ", TargetProfile::for_receptor(receptor, action))
        .with_affinity(affinity)
}

/// Default lobule plus natural progression only, for comparison
fn progressed_only(model: &TissueModel, state: &TissueState) -> TissueState {
    let mut copy = state.clone();
    model.advance(&mut copy);
    copy
}

// ============================================================================
// Gates
// ============================================================================

#[test]
fn test_sub_threshold_affinity_is_no_op() {
    let model = TissueModel::default();
    let mut state = TissueState::default();
    let expected = progressed_only(&model, &state);

    let report = model.apply_treatment(
        &mut state,
        dose("TGFBR2", Action::Inhibit, 0.5).with_potency(1.0),
    );

    assert!(matches!(report.outcome, TreatmentOutcome::InsufficientBinding { .. }));
    assert_eq!(state.stellate_activation(), expected.stellate_activation());
    assert_eq!(state.epigenetic_driver(), expected.epigenetic_driver());
    assert_eq!(state.fibrosis_index(), expected.fibrosis_index());
}

#[test]
fn test_wrong_target_never_lowers_fibrosis() {
    let model = TissueModel::default();
    for fibrosis in [0.3, 0.45, 0.6, 0.9, 1.0] {
        for driver in [0.0, 0.5, 1.0] {
            let mut state = TissueState::new(fibrosis, 0.7, 0.5, driver);
            let before = state.fibrosis_index();
            let expected = progressed_only(&model, &state);

            let report = model.apply_treatment(&mut state, dose("DOPAMINE_R", Action::Activate, 0.99));

            assert_eq!(report.outcome, TreatmentOutcome::UnknownReceptor);
            // Only natural progression moves fibrosis
            assert_eq!(state.fibrosis_index(), expected.fibrosis_index());
            if driver > 0.5 {
                assert!(state.fibrosis_index() >= before);
            }
        }
    }
}

#[test]
fn test_pathology_gate_blocks_dose_and_toxicity() {
    let model = TissueModel::default();
    let mut state = TissueState::new(0.2, 1.0, 0.4, 1.0);
    let expected = progressed_only(&model, &state);

    let report = model.apply_treatment(
        &mut state,
        dose("TGFBR2", Action::Inhibit, 0.99)
            .with_potency(1.0)
            .with_immunogenicity(0.9),
    );

    assert_eq!(report.outcome, TreatmentOutcome::NoActivePathology);
    assert_eq!(report.toxicity_penalty, 0.0);
    assert_eq!(&state, &expected);
}

// ============================================================================
// Effects
// ============================================================================

#[test]
fn test_effective_inhibition() {
    let model = TissueModel::default();
    let mut state = TissueState::new(0.9, 1.0, 0.4, 1.0);
    let before = state.clone();

    let report = model.apply_treatment(
        &mut state,
        dose("TGFBR2", Action::Inhibit, 0.95)
            .with_potency(1.0)
            .with_immunogenicity(0.0),
    );

    assert!(report.outcome.is_effective());
    assert!(state.stellate_activation() < before.stellate_activation());
    assert!(state.epigenetic_driver() < before.epigenetic_driver());
    assert!(state.fibrosis_index() <= before.fibrosis_index());
    assert_eq!(state.step(), 1);
}

#[test]
fn test_tgfbr2_activation_worsens_fibrosis() {
    let model = TissueModel::default();
    let mut state = TissueState::new(0.6, 0.8, 0.5, 1.0);
    let expected = progressed_only(&model, &state);

    let report = model.apply_treatment(
        &mut state,
        dose("TGFBR2", Action::Activate, 0.9).with_potency(1.0),
    );

    assert!(matches!(report.outcome, TreatmentOutcome::Worsened { .. }));
    assert!(state.fibrosis_index() > expected.fibrosis_index());
}

#[test]
fn test_egfr_activation_regenerates() {
    let model = TissueModel::default();
    let mut state = TissueState::default();
    assert!((state.hepatocyte_viability() - 0.4).abs() < 1e-12);

    let report = model.apply_treatment(&mut state, dose("EGFR", Action::Activate, 0.9));

    assert!(matches!(report.outcome, TreatmentOutcome::Regenerated { .. }));
    assert!(state.hepatocyte_viability() > 0.4);
}

#[test]
fn test_toxicity_penalty() {
    let model = TissueModel::default();

    let mut clean = TissueState::default();
    model.apply_treatment(
        &mut clean,
        dose("EGFR", Action::Activate, 0.9).with_immunogenicity(0.0),
    );

    let mut toxic = TissueState::default();
    let report = model.apply_treatment(
        &mut toxic,
        dose("EGFR", Action::Activate, 0.9).with_immunogenicity(0.6),
    );

    assert!(report.toxicity_penalty > 0.0);
    assert!(toxic.hepatocyte_viability() < clean.hepatocyte_viability());
}

#[test]
fn test_toxicity_applies_to_unbound_dose() {
    let model = TissueModel::default();
    let mut state = TissueState::default();

    let report = model.apply_treatment(
        &mut state,
        dose("DOPAMINE_R", Action::Activate, 0.99).with_immunogenicity(0.8),
    );

    assert_eq!(report.outcome, TreatmentOutcome::UnknownReceptor);
    assert!((report.toxicity_penalty - 0.16).abs() < 1e-12);
    assert!(state.hepatocyte_viability() < 0.4);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_repeated_maximal_doses_stay_in_range() {
    let model = TissueModel::default();
    let mut state = TissueState::default();

    for i in 0..25 {
        let (receptor, action) = match i % 3 {
            0 => ("TGFBR2", Action::Inhibit),
            1 => ("TGFBR2", Action::Activate),
            _ => ("EGFR", Action::Activate),
        };
        model.apply_treatment(
            &mut state,
            dose(receptor, action, 1.0)
                .with_potency(1.0)
                .with_immunogenicity(1.0),
        );
        assert!(state.is_in_range(), "out of range after dose {}: {:?}", i, state);
    }
    assert_eq!(state.step(), 25);
}

#[test]
fn test_inhibition_loop_drives_recovery() {
    let model = TissueModel::default();
    let mut state = TissueState::default();

    for _ in 0..12 {
        model.apply_treatment(
            &mut state,
            dose("TGFBR2", Action::Inhibit, 1.0).with_potency(1.0),
        );
        assert!(state.is_in_range());
    }

    assert_eq!(state.stellate_activation(), 0.0);
    assert_eq!(state.epigenetic_driver(), 0.0);
    assert!(state.fibrosis_index() < 0.9);
}
