#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use alloy::primitives::{Address, U256};

use dappflow_adapters::{AdapterConfig, Eip1193Adapter};
use dappflow_core::{BalanceFallbackPort, ChainTarget, ClockPort, PortError, WalletWorkflow};

#[derive(Debug, Default)]
pub struct TestClock {
    now: AtomicU64,
}

impl ClockPort for TestClock {
    fn now_ms(&self) -> Result<u64, PortError> {
        Ok(self.now.fetch_add(1, Ordering::SeqCst) + 1_754_352_000_000)
    }
}

/// Balance fallback with a scripted result: `Some` answers every read,
/// `None` fails like an unreachable endpoint.
#[derive(Debug, Default)]
pub struct ScriptedFallback {
    balance: Mutex<Option<U256>>,
}

impl ScriptedFallback {
    pub fn with_balance(minimal: U256) -> Self {
        Self {
            balance: Mutex::new(Some(minimal)),
        }
    }

    pub fn unreachable() -> Self {
        Self::default()
    }
}

impl BalanceFallbackPort for ScriptedFallback {
    fn balance_of(&self, _account: Address) -> Result<U256, PortError> {
        self.balance
            .lock()
            .expect("fallback lock")
            .ok_or_else(|| PortError::Transport("fallback endpoint unreachable".to_owned()))
    }
}

pub type TestWorkflow = WalletWorkflow<Eip1193Adapter, ScriptedFallback, TestClock>;

pub fn new_workflow() -> TestWorkflow {
    new_workflow_with_fallback(ScriptedFallback::unreachable())
}

pub fn new_workflow_with_fallback(fallback: ScriptedFallback) -> TestWorkflow {
    WalletWorkflow::new(
        Eip1193Adapter::with_config(AdapterConfig::default()),
        fallback,
        TestClock::default(),
        ChainTarget::base_mainnet(),
    )
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn owner_address() -> Address {
    "0x1000000000000000000000000000000000000001"
        .parse()
        .expect("valid owner address")
}

pub fn recipient_address() -> Address {
    "0x000000000000000000000000000000000000CAFE"
        .parse()
        .expect("valid recipient address")
}

pub fn one_and_a_half_eth() -> U256 {
    U256::from(1_500_000_000_000_000_000u64)
}

pub fn count_calls(calls: &[String], prefix: &str) -> usize {
    calls.iter().filter(|c| c.starts_with(prefix)).count()
}
