mod common;

use alloy::primitives::U256;

use common::{count_calls, new_workflow, owner_address, recipient_address, TestWorkflow};
use dappflow_core::{SubmitPhase, SubmitRequest, TransferRequest, WorkflowError};

fn connected_workflow() -> TestWorkflow {
    let mut wf = new_workflow();
    wf.provider
        .debug_set_balance(owner_address(), U256::from(5_000_000_000_000_000_000u64))
        .expect("seed balance");
    wf.request_connection().expect("connect");
    wf
}

fn transfer(amount: &str) -> SubmitRequest {
    SubmitRequest::Transfer(TransferRequest {
        sender: owner_address(),
        recipient: recipient_address().to_string(),
        amount_native: amount.to_owned(),
        gas_limit: None,
    })
}

#[test]
fn short_recipient_is_rejected_before_any_network_call() {
    let mut wf = connected_workflow();
    let baseline = wf.provider.debug_calls().expect("calls").len();

    let req = SubmitRequest::Transfer(TransferRequest {
        sender: owner_address(),
        recipient: "0xabc".to_owned(),
        amount_native: "0.5".to_owned(),
        gas_limit: None,
    });
    let err = wf.submit(&req).expect_err("must fail locally");
    assert!(matches!(err, WorkflowError::InvalidAddress));

    assert_eq!(wf.provider.debug_calls().expect("calls").len(), baseline);
    assert_eq!(wf.phase(), SubmitPhase::Idle);
}

#[test]
fn non_positive_amounts_are_rejected_locally() {
    let mut wf = connected_workflow();
    for amount in ["0", "-1", "abc", ""] {
        let err = wf.submit(&transfer(amount)).expect_err("must fail");
        assert!(
            matches!(err, WorkflowError::InvalidAmount),
            "'{amount}' gave {err:?}"
        );
        assert_eq!(wf.phase(), SubmitPhase::Idle);
    }
}

#[test]
fn amount_above_last_known_balance_is_advisory_rejected() {
    let mut wf = connected_workflow();
    let err = wf.submit(&transfer("6")).expect_err("must fail");
    assert!(matches!(err, WorkflowError::InsufficientBalance));
}

#[test]
fn display_amount_is_converted_with_integer_arithmetic() {
    let mut wf = connected_workflow();

    let result = wf.submit(&transfer("1.5")).expect("submit");
    assert_ne!(result.transaction_id, alloy::primitives::B256::ZERO);

    let sent = wf.provider.debug_sent_payloads().expect("sent");
    assert_eq!(sent.len(), 1);
    let payload = &sent[0];
    assert_eq!(payload["value"], "0x14d1120d7b160000");
    assert_eq!(payload["gas"], "0x5208");
    assert_eq!(payload["gasPrice"], "0x3b9aca00");
    assert_eq!(
        payload["to"].as_str().expect("to").to_lowercase(),
        recipient_address().to_string().to_lowercase()
    );
    assert_eq!(
        payload["from"].as_str().expect("from").to_lowercase(),
        owner_address().to_string().to_lowercase()
    );

    // Success refreshed the balance and returned the workflow to idle.
    assert_eq!(wf.phase(), SubmitPhase::Idle);
    let calls = wf.provider.debug_calls().expect("calls");
    assert_eq!(count_calls(&calls, "eth_getBalance"), 2);
}

#[test]
fn caller_gas_limit_skips_estimation() {
    let mut wf = connected_workflow();
    let baseline = {
        let calls = wf.provider.debug_calls().expect("calls");
        count_calls(&calls, "eth_estimateGas")
    };

    let req = SubmitRequest::Transfer(TransferRequest {
        sender: owner_address(),
        recipient: recipient_address().to_string(),
        amount_native: "0.5".to_owned(),
        gas_limit: Some(50_000),
    });
    wf.submit(&req).expect("submit");

    let calls = wf.provider.debug_calls().expect("calls");
    assert_eq!(count_calls(&calls, "eth_estimateGas"), baseline);
    let sent = wf.provider.debug_sent_payloads().expect("sent");
    assert_eq!(sent.last().expect("payload")["gas"], "0xc350");
}

#[test]
fn user_decline_keeps_the_session_connected() {
    let mut wf = connected_workflow();
    wf.provider
        .debug_script_send_failure(Some((4001, "User denied transaction signature.".to_owned())))
        .expect("script");

    let err = wf.submit(&transfer("0.5")).expect_err("declined");
    assert!(matches!(err, WorkflowError::UserRejected));

    assert!(wf.session().is_connected());
    assert_eq!(wf.phase(), SubmitPhase::Idle);
    assert!(wf.provider.debug_sent_payloads().expect("sent").is_empty());
}

#[test]
fn other_send_failures_carry_the_provider_message() {
    let mut wf = connected_workflow();
    wf.provider
        .debug_script_send_failure(Some((
            -32000,
            "insufficient funds for gas * price + value".to_owned(),
        )))
        .expect("script");

    let err = wf.submit(&transfer("0.5")).expect_err("must fail");
    match err {
        WorkflowError::SubmissionFailed(message) => {
            assert!(message.contains("insufficient funds"), "got '{message}'");
        }
        other => panic!("expected SubmissionFailed, got {other:?}"),
    }
    assert_eq!(wf.phase(), SubmitPhase::Idle);
}

#[test]
fn workflow_reenters_idle_and_accepts_the_next_submission() {
    let mut wf = connected_workflow();
    wf.submit(&transfer("0.5")).expect("first");
    wf.submit(&transfer("0.25")).expect("second");
    assert_eq!(wf.provider.debug_sent_payloads().expect("sent").len(), 2);
}

#[test]
fn submission_requires_an_active_session() {
    let mut wf = new_workflow();
    let err = wf.submit(&transfer("0.5")).expect_err("not connected");
    assert!(matches!(err, WorkflowError::NotConnected));
}
