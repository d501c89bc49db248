use alloy::primitives::{Address, B256, U256};
use serde_json::Value;
use thiserror::Error;

use crate::domain::ChainTarget;

/// EIP-1193 error code for a user declining a prompt.
pub const CODE_USER_REJECTED: i64 = 4001;
/// EIP-3085/3326 error code for a chain the provider has not registered.
pub const CODE_UNRECOGNIZED_CHAIN: i64 = 4902;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("provider error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
}

impl PortError {
    pub fn user_rejected(&self) -> bool {
        matches!(self, Self::Rpc { code, .. } if *code == CODE_USER_REJECTED)
    }

    pub fn unrecognized_chain(&self) -> bool {
        matches!(self, Self::Rpc { code, .. } if *code == CODE_UNRECOGNIZED_CHAIN)
    }
}

/// The injected wallet bridge. One request-based operation per capability;
/// structured failures surface as `PortError::Rpc` with the provider's code.
pub trait WalletProviderPort {
    /// `eth_accounts`: already-authorized accounts, never prompts.
    fn authorized_accounts(&self) -> Result<Vec<Address>, PortError>;
    /// `eth_requestAccounts`: prompts the user for authorization.
    fn request_accounts(&self) -> Result<Vec<Address>, PortError>;
    fn chain_id(&self) -> Result<u64, PortError>;
    fn switch_chain(&self, chain_id: u64) -> Result<(), PortError>;
    fn add_chain(&self, target: &ChainTarget) -> Result<(), PortError>;
    fn balance_of(&self, account: Address) -> Result<U256, PortError>;
    fn estimate_gas(&self, tx_payload: &Value) -> Result<U256, PortError>;
    fn gas_price(&self) -> Result<U256, PortError>;
    fn send_transaction(&self, tx_payload: &Value) -> Result<B256, PortError>;
    /// Blocks until the transaction is mined. No timeout: a hung provider
    /// hangs the action, which is inherited from the bridge.
    fn await_confirmation(&self, transaction_id: B256) -> Result<(), PortError>;
}

/// Direct public-RPC transport used only when the provider balance path fails.
pub trait BalanceFallbackPort {
    fn balance_of(&self, account: Address) -> Result<U256, PortError>;
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<u64, PortError>;
}
