mod common;

use alloy::primitives::U256;

use common::{
    count_calls, new_workflow, new_workflow_with_fallback, owner_address, ScriptedFallback,
};

#[test]
fn provider_path_formats_six_fractional_digits() {
    let mut wf = new_workflow();
    wf.provider
        .debug_inject_chain_changed(8453)
        .expect("on target");
    wf.provider
        .debug_set_balance(owner_address(), common::one_and_a_half_eth())
        .expect("seed balance");

    assert_eq!(wf.read_balance(owner_address()), "1.500000");
    assert_eq!(wf.last_balance(), Some(common::one_and_a_half_eth()));
}

#[test]
fn provider_failure_falls_back_to_public_rpc() {
    let mut wf = new_workflow_with_fallback(ScriptedFallback::with_balance(U256::from(
        250_000_000_000_000_000u64,
    )));
    wf.provider
        .debug_inject_chain_changed(8453)
        .expect("on target");
    wf.provider.debug_fail_balance_reads(true).expect("script");

    assert_eq!(wf.read_balance(owner_address()), "0.250000");
    assert_eq!(
        wf.last_balance(),
        Some(U256::from(250_000_000_000_000_000u64))
    );

    // The provider path was attempted first.
    let calls = wf.provider.debug_calls().expect("calls");
    assert_eq!(count_calls(&calls, "eth_getBalance"), 1);
}

#[test]
fn chain_guard_failure_counts_as_a_provider_path_failure() {
    let mut wf = new_workflow_with_fallback(ScriptedFallback::with_balance(U256::from(
        250_000_000_000_000_000u64,
    )));
    wf.provider
        .debug_script_switch_failure(Some((-32603, "internal provider error".to_owned())))
        .expect("script");

    assert_eq!(wf.read_balance(owner_address()), "0.250000");

    // The balance query never reached the provider.
    let calls = wf.provider.debug_calls().expect("calls");
    assert_eq!(count_calls(&calls, "eth_getBalance"), 0);
}

#[test]
fn degrades_to_zero_when_both_paths_fail() {
    let mut wf = new_workflow();
    wf.provider
        .debug_inject_chain_changed(8453)
        .expect("on target");
    wf.provider.debug_fail_balance_reads(true).expect("script");

    assert_eq!(wf.read_balance(owner_address()), "0.000000");
    assert_eq!(wf.last_balance(), None);
}
