//! Decoding of JSON-RPC response fragments shared by the provider proxy and
//! the balance fallback transport.

use alloy::primitives::{Address, B256, U256};
use serde_json::Value;

use dappflow_core::PortError;

/// Maps a JSON-RPC `error` object to a structured port failure, keeping the
/// provider's numeric code so the workflow can classify it.
pub(crate) fn rpc_error(err: &Value) -> PortError {
    let code = err.get("code").and_then(Value::as_i64);
    let message = err
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown provider error")
        .to_owned();
    match code {
        Some(code) => PortError::Rpc { code, message },
        None => PortError::Transport(format!("malformed rpc error: {err}")),
    }
}

pub(crate) fn json_to_u256(value: &Value) -> Result<U256, PortError> {
    let raw = value
        .as_str()
        .ok_or_else(|| PortError::Transport(format!("quantity must be a hex string: {value}")))?;
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    U256::from_str_radix(digits, 16)
        .map_err(|e| PortError::Validation(format!("invalid hex quantity '{raw}': {e}")))
}

pub(crate) fn json_to_b256(value: &Value) -> Result<B256, PortError> {
    let raw = value
        .as_str()
        .ok_or_else(|| PortError::Transport(format!("hash must be a hex string: {value}")))?;
    raw.parse()
        .map_err(|e| PortError::Validation(format!("invalid transaction hash '{raw}': {e}")))
}

pub(crate) fn json_to_accounts(value: &Value) -> Result<Vec<Address>, PortError> {
    let arr = value
        .as_array()
        .ok_or_else(|| PortError::Transport("account list must be an array".to_owned()))?;
    let mut accounts = Vec::with_capacity(arr.len());
    for item in arr {
        let raw = item
            .as_str()
            .ok_or_else(|| PortError::Transport("account entry must be a string".to_owned()))?;
        let parsed: Address = raw
            .parse()
            .map_err(|e| PortError::Validation(format!("invalid account address: {e}")))?;
        accounts.push(parsed);
    }
    Ok(accounts)
}

pub(crate) fn json_chain_id_to_u64(value: &Value) -> Result<u64, PortError> {
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    let raw = value
        .as_str()
        .ok_or_else(|| PortError::Validation("chain id must be string or number".to_owned()))?;
    parse_chain_id_str(raw)
}

pub(crate) fn parse_chain_id_str(raw: &str) -> Result<u64, PortError> {
    if let Some(digits) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u64::from_str_radix(digits, 16)
            .map_err(|e| PortError::Validation(format!("invalid hex chain id: {e}")))
    } else {
        raw.parse()
            .map_err(|e| PortError::Validation(format!("invalid chain id: {e}")))
    }
}
