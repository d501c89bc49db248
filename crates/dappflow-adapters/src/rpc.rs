use std::time::Duration;

use alloy::primitives::{Address, U256};
use serde_json::{json, Value};

use dappflow_core::{BalanceFallbackPort, ChainTarget, PortError};

use crate::wire;
use crate::AdapterConfig;

/// Plain JSON-RPC transport against the chain's first public endpoint. Used
/// only for balance reads when the provider path fails; it bypasses the
/// provider entirely.
#[derive(Debug, Clone)]
pub struct RpcFallbackAdapter {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl RpcFallbackAdapter {
    pub fn new(target: &ChainTarget, config: &AdapterConfig) -> Result<Self, PortError> {
        let endpoint = target
            .rpc_endpoints
            .first()
            .cloned()
            .ok_or_else(|| PortError::Validation("chain target has no RPC endpoints".to_owned()))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.fallback_timeout_ms))
            .build()
            .map_err(|e| PortError::Transport(format!("failed to build RPC client: {e}")))?;
        Ok(Self { endpoint, client })
    }

    fn rpc_call(&self, method: &str, params: Value) -> Result<Value, PortError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        tracing::debug!(%method, endpoint = %self.endpoint, "rpc fallback request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .map_err(|e| PortError::Transport(format!("rpc request failed: {e}")))?;
        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("rpc json decode failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Transport(format!("rpc status {status}: {body}")));
        }
        if let Some(err) = body.get("error") {
            return Err(wire::rpc_error(err));
        }
        body.get("result")
            .cloned()
            .ok_or_else(|| PortError::Transport("rpc response missing result".to_owned()))
    }
}

impl BalanceFallbackPort for RpcFallbackAdapter {
    fn balance_of(&self, account: Address) -> Result<U256, PortError> {
        let result = self.rpc_call("eth_getBalance", json!([account.to_string(), "latest"]))?;
        wire::json_to_u256(&result)
    }
}
