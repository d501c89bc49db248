use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::ports::PortError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Immutable description of the chain the workflow must keep the provider on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainTarget {
    pub chain_id: u64,
    pub display_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_endpoints: Vec<String>,
    pub explorer_endpoints: Vec<String>,
}

impl ChainTarget {
    pub fn base_mainnet() -> Self {
        Self {
            chain_id: 8453,
            display_name: "Base".to_owned(),
            native_currency: NativeCurrency {
                name: "Ethereum".to_owned(),
                symbol: "ETH".to_owned(),
                decimals: 18,
            },
            rpc_endpoints: vec!["https://mainnet.base.org".to_owned()],
            explorer_endpoints: vec!["https://basescan.org".to_owned()],
        }
    }

    /// Chain id in the 0x-prefixed hex form providers expect.
    pub fn chain_id_hex(&self) -> String {
        format!("0x{:x}", self.chain_id)
    }

    /// `wallet_addEthereumChain` parameter object, exactly as it goes on the wire.
    pub fn add_chain_params(&self) -> Value {
        json!({
            "chainId": self.chain_id_hex(),
            "chainName": self.display_name,
            "nativeCurrency": {
                "name": self.native_currency.name,
                "symbol": self.native_currency.symbol,
                "decimals": self.native_currency.decimals,
            },
            "rpcUrls": self.rpc_endpoints,
            "blockExplorerUrls": self.explorer_endpoints,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub active_account: Option<Address>,
    pub is_connecting: bool,
}

impl Session {
    pub fn is_connected(&self) -> bool {
        self.active_account.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: &'static str,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub sender: Address,
    pub recipient: String,
    pub amount_native: String,
    pub gas_limit: Option<u64>,
}

impl TransferRequest {
    /// Parses the raw recipient input. Accepts exactly `0x` followed by 40 hex
    /// characters; everything else (ENS names, missing prefix, wrong length)
    /// is rejected locally before any network call.
    pub fn recipient_address(&self) -> Result<Address, PortError> {
        let raw = self.recipient.trim();
        if !raw.starts_with("0x") || raw.len() != 42 {
            return Err(PortError::Validation(format!(
                "recipient must be a 0x-prefixed 20-byte hex address, got '{raw}'"
            )));
        }
        raw.parse()
            .map_err(|e| PortError::Validation(format!("invalid recipient address: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionResult {
    pub transaction_id: B256,
}
