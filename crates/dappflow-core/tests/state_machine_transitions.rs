use dappflow_core::{submit_transition, SubmitAction, SubmitPhase};

#[test]
fn submission_happy_path_transitions() {
    let (s1, _) = submit_transition(SubmitPhase::Idle, SubmitAction::Begin).expect("idle -> begin");
    assert_eq!(s1, SubmitPhase::Validating);
    let (s2, _) = submit_transition(s1, SubmitAction::ChainCheck).expect("validating -> chain");
    assert_eq!(s2, SubmitPhase::ChainChecking);
    let (s3, _) = submit_transition(s2, SubmitAction::Dispatch).expect("chain -> submitting");
    assert_eq!(s3, SubmitPhase::Submitting);
    let (s4, _) = submit_transition(s3, SubmitAction::Confirm).expect("submitting -> confirmed");
    assert_eq!(s4, SubmitPhase::Confirmed);
    let (s5, _) = submit_transition(s4, SubmitAction::Reset).expect("confirmed -> idle");
    assert_eq!(s5, SubmitPhase::Idle);
}

#[test]
fn submission_decline_path_transitions() {
    let (s1, _) = submit_transition(SubmitPhase::Submitting, SubmitAction::Reject)
        .expect("submitting -> rejected");
    assert_eq!(s1, SubmitPhase::Rejected);
    let (s2, _) = submit_transition(s1, SubmitAction::Reset).expect("rejected -> idle");
    assert_eq!(s2, SubmitPhase::Idle);
}

#[test]
fn every_in_flight_phase_can_fail() {
    for phase in [
        SubmitPhase::Validating,
        SubmitPhase::ChainChecking,
        SubmitPhase::Submitting,
    ] {
        let (next, transition) =
            submit_transition(phase, SubmitAction::Fail).expect("in-flight -> failed");
        assert_eq!(next, SubmitPhase::Failed);
        assert_eq!(transition.from, phase);
    }
}

#[test]
fn new_submission_only_accepted_from_idle() {
    for phase in [
        SubmitPhase::Validating,
        SubmitPhase::ChainChecking,
        SubmitPhase::Submitting,
        SubmitPhase::Confirmed,
        SubmitPhase::Rejected,
        SubmitPhase::Failed,
    ] {
        let err = submit_transition(phase, SubmitAction::Begin).expect_err("must fail");
        assert!(err.to_string().contains("illegal submission transition"));
    }
}

#[test]
fn terminal_phases_only_reset() {
    let err = submit_transition(SubmitPhase::Confirmed, SubmitAction::Dispatch)
        .expect_err("must fail");
    assert!(err.to_string().contains("illegal submission transition"));
    let err = submit_transition(SubmitPhase::Idle, SubmitAction::Reset).expect_err("must fail");
    assert!(err.to_string().contains("illegal submission transition"));
}
