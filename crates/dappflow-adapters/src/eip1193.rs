use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use alloy::primitives::{keccak256, Address, B256, U256};
use serde_json::{json, Value};

use dappflow_core::{
    ChainTarget, PortError, WalletProviderPort, CODE_UNRECOGNIZED_CHAIN, CODE_USER_REJECTED,
};

use crate::wire;
use crate::AdapterConfig;

/// EIP-1193 wallet bridge.
///
/// Browser builds talk to `window.ethereum`. Native builds can proxy every
/// request to a JSON-RPC endpoint standing in for the provider; without a
/// proxy URL, a deterministic in-memory provider backs development and tests.
/// The production profile refuses to fall back to the deterministic provider.
#[derive(Debug, Clone)]
pub struct Eip1193Adapter {
    mode: ProviderMode,
    state: Arc<Mutex<ProviderState>>,
}

#[derive(Debug, Clone)]
enum ProviderMode {
    Disabled(String),
    Deterministic,
    #[cfg(not(target_arch = "wasm32"))]
    Proxy(ProxyRuntime),
    #[cfg(target_arch = "wasm32")]
    Browser,
}

#[derive(Debug, Clone)]
#[cfg(not(target_arch = "wasm32"))]
struct ProxyRuntime {
    base_url: String,
    client: reqwest::blocking::Client,
    poll_interval_ms: u64,
}

#[derive(Debug, Clone)]
struct ProviderState {
    wallet_accounts: Vec<Address>,
    authorized: bool,
    chain_id: u64,
    registered_chains: Vec<u64>,
    balances: HashMap<Address, U256>,
    gas_price: U256,
    reject_connections: bool,
    scripted_send_failure: Option<(i64, String)>,
    scripted_switch_failure: Option<(i64, String)>,
    fail_balance_reads: bool,
    sent: Vec<Value>,
    calls: Vec<String>,
}

impl Default for ProviderState {
    fn default() -> Self {
        Self {
            wallet_accounts: vec!["0x1000000000000000000000000000000000000001"
                .parse()
                .expect("valid built-in deterministic account")],
            authorized: false,
            chain_id: 1,
            registered_chains: vec![1],
            balances: HashMap::new(),
            gas_price: U256::from(1_000_000_000u64),
            reject_connections: false,
            scripted_send_failure: None,
            scripted_switch_failure: None,
            fail_balance_reads: false,
            sent: Vec::new(),
            calls: Vec::new(),
        }
    }
}

impl Default for Eip1193Adapter {
    fn default() -> Self {
        Self::with_config(AdapterConfig::from_env())
    }
}

impl Eip1193Adapter {
    pub fn with_config(config: AdapterConfig) -> Self {
        #[cfg(target_arch = "wasm32")]
        let mode = if browser_provider_available() {
            ProviderMode::Browser
        } else if config.strict_runtime_required() {
            ProviderMode::Disabled(
                "EIP-1193 browser provider not found in production runtime profile".to_owned(),
            )
        } else {
            ProviderMode::Deterministic
        };

        #[cfg(not(target_arch = "wasm32"))]
        let mode = if let Some(ref base_url) = config.eip1193_proxy_url {
            let timeout = std::time::Duration::from_millis(config.provider_timeout_ms);
            match reqwest::blocking::Client::builder().timeout(timeout).build() {
                Ok(client) => ProviderMode::Proxy(ProxyRuntime {
                    base_url: base_url.clone(),
                    client,
                    poll_interval_ms: config.confirmation_poll_interval_ms,
                }),
                Err(e) => {
                    if config.strict_runtime_required() {
                        ProviderMode::Disabled(format!(
                            "failed to initialize EIP-1193 proxy client in production profile: {e}"
                        ))
                    } else {
                        ProviderMode::Deterministic
                    }
                }
            }
        } else if config.strict_runtime_required() {
            ProviderMode::Disabled(
                "EIP-1193 proxy URL not configured in production runtime profile".to_owned(),
            )
        } else {
            ProviderMode::Deterministic
        };

        let adapter = Self {
            mode,
            state: Arc::new(Mutex::new(ProviderState::default())),
        };

        #[cfg(target_arch = "wasm32")]
        if matches!(adapter.mode, ProviderMode::Browser) {
            let _ = adapter.refresh_browser_snapshot();
        }

        adapter
    }

    /// Detection is a normal, silent outcome: `None` means no bridge runtime
    /// is available, not an error.
    pub fn detect() -> Option<Self> {
        let adapter = Self::default();
        match adapter.mode {
            ProviderMode::Disabled(_) => None,
            _ => Some(adapter),
        }
    }

    fn check_mode(&self) -> Result<(), PortError> {
        if let ProviderMode::Disabled(reason) = &self.mode {
            return Err(PortError::Unavailable(reason.clone()));
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ProviderState>, PortError> {
        self.state
            .lock()
            .map_err(|e| PortError::Transport(format!("provider lock poisoned: {e}")))
    }

    // Deterministic scripting and inspection hooks for tests.

    pub fn debug_authorize(&self) -> Result<(), PortError> {
        self.lock()?.authorized = true;
        Ok(())
    }

    pub fn debug_set_wallet_accounts(&self, accounts: Vec<Address>) -> Result<(), PortError> {
        self.lock()?.wallet_accounts = accounts;
        Ok(())
    }

    /// Moves the deterministic provider onto `chain_id`, registering it the
    /// way a wallet that is already on a chain must know it.
    pub fn debug_inject_chain_changed(&self, chain_id: u64) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if !g.registered_chains.contains(&chain_id) {
            g.registered_chains.push(chain_id);
        }
        g.chain_id = chain_id;
        Ok(())
    }

    pub fn debug_register_chain(&self, chain_id: u64) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if !g.registered_chains.contains(&chain_id) {
            g.registered_chains.push(chain_id);
        }
        Ok(())
    }

    pub fn debug_set_balance(&self, account: Address, minimal: U256) -> Result<(), PortError> {
        self.lock()?.balances.insert(account, minimal);
        Ok(())
    }

    pub fn debug_fail_balance_reads(&self, fail: bool) -> Result<(), PortError> {
        self.lock()?.fail_balance_reads = fail;
        Ok(())
    }

    pub fn debug_reject_connections(&self, reject: bool) -> Result<(), PortError> {
        self.lock()?.reject_connections = reject;
        Ok(())
    }

    pub fn debug_script_send_failure(
        &self,
        failure: Option<(i64, String)>,
    ) -> Result<(), PortError> {
        self.lock()?.scripted_send_failure = failure;
        Ok(())
    }

    pub fn debug_script_switch_failure(
        &self,
        failure: Option<(i64, String)>,
    ) -> Result<(), PortError> {
        self.lock()?.scripted_switch_failure = failure;
        Ok(())
    }

    /// RPC method names in invocation order, deterministic mode only.
    pub fn debug_calls(&self) -> Result<Vec<String>, PortError> {
        Ok(self.lock()?.calls.clone())
    }

    pub fn debug_sent_payloads(&self) -> Result<Vec<Value>, PortError> {
        Ok(self.lock()?.sent.clone())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn proxy_call(&self, method: &str, params: Value) -> Result<Value, PortError> {
        let proxy = match &self.mode {
            ProviderMode::Proxy(proxy) => proxy,
            ProviderMode::Disabled(reason) => return Err(PortError::Unavailable(reason.clone())),
            _ => {
                return Err(PortError::NotImplemented(
                    "eip1193 proxy runtime not enabled",
                ))
            }
        };

        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        tracing::debug!(%method, "eip1193 proxy request");
        let response = proxy
            .client
            .post(&proxy.base_url)
            .json(&payload)
            .send()
            .map_err(|e| PortError::Transport(format!("eip1193 proxy request failed: {e}")))?;
        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("eip1193 proxy json decode failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Transport(format!(
                "eip1193 proxy status {status}: {body}"
            )));
        }
        if let Some(err) = body.get("error") {
            return Err(wire::rpc_error(err));
        }
        body.get("result")
            .cloned()
            .ok_or_else(|| PortError::Transport("eip1193 proxy missing result".to_owned()))
    }

    fn record(&self, call: impl Into<String>) -> Result<(), PortError> {
        self.lock()?.calls.push(call.into());
        Ok(())
    }
}

impl WalletProviderPort for Eip1193Adapter {
    fn authorized_accounts(&self) -> Result<Vec<Address>, PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            self.refresh_browser_snapshot()?;
            let g = self.lock()?;
            return Ok(if g.authorized {
                g.wallet_accounts.clone()
            } else {
                Vec::new()
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        if matches!(self.mode, ProviderMode::Proxy(_)) {
            let result = self.proxy_call("eth_accounts", json!([]))?;
            return wire::json_to_accounts(&result);
        }

        self.record("eth_accounts")?;
        let g = self.lock()?;
        Ok(if g.authorized {
            g.wallet_accounts.clone()
        } else {
            Vec::new()
        })
    }

    fn request_accounts(&self) -> Result<Vec<Address>, PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            self.refresh_browser_snapshot()?;
            let g = self.lock()?;
            if g.authorized {
                return Ok(g.wallet_accounts.clone());
            }
            return Err(PortError::NotImplemented(
                "browser authorization prompt requires wasm_request_accounts_async",
            ));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if matches!(self.mode, ProviderMode::Proxy(_)) {
            let result = self.proxy_call("eth_requestAccounts", json!([]))?;
            return wire::json_to_accounts(&result);
        }

        self.record("eth_requestAccounts")?;
        let mut g = self.lock()?;
        if g.reject_connections {
            return Err(PortError::Rpc {
                code: CODE_USER_REJECTED,
                message: "User rejected the request.".to_owned(),
            });
        }
        g.authorized = true;
        Ok(g.wallet_accounts.clone())
    }

    fn chain_id(&self) -> Result<u64, PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            self.refresh_browser_snapshot()?;
            return Ok(self.lock()?.chain_id);
        }

        #[cfg(not(target_arch = "wasm32"))]
        if matches!(self.mode, ProviderMode::Proxy(_)) {
            let result = self.proxy_call("eth_chainId", json!([]))?;
            return wire::json_chain_id_to_u64(&result);
        }

        self.record("eth_chainId")?;
        Ok(self.lock()?.chain_id)
    }

    fn switch_chain(&self, chain_id: u64) -> Result<(), PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            return Err(PortError::NotImplemented(
                "browser chain switch requires wasm_switch_chain_async",
            ));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if matches!(self.mode, ProviderMode::Proxy(_)) {
            let params = json!([{ "chainId": format!("0x{chain_id:x}") }]);
            self.proxy_call("wallet_switchEthereumChain", params)?;
            return Ok(());
        }

        self.record(format!("wallet_switchEthereumChain:0x{chain_id:x}"))?;
        let mut g = self.lock()?;
        if let Some((code, message)) = g.scripted_switch_failure.clone() {
            return Err(PortError::Rpc { code, message });
        }
        if g.registered_chains.contains(&chain_id) {
            g.chain_id = chain_id;
            Ok(())
        } else {
            Err(PortError::Rpc {
                code: CODE_UNRECOGNIZED_CHAIN,
                message: format!(
                    "Unrecognized chain ID \"0x{chain_id:x}\". Try adding the chain using wallet_addEthereumChain first."
                ),
            })
        }
    }

    fn add_chain(&self, target: &ChainTarget) -> Result<(), PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            return Err(PortError::NotImplemented(
                "browser chain registration requires wasm_add_chain_async",
            ));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if matches!(self.mode, ProviderMode::Proxy(_)) {
            self.proxy_call("wallet_addEthereumChain", json!([target.add_chain_params()]))?;
            return Ok(());
        }

        self.record(format!(
            "wallet_addEthereumChain:{}",
            target.chain_id_hex()
        ))?;
        let mut g = self.lock()?;
        if !g.registered_chains.contains(&target.chain_id) {
            g.registered_chains.push(target.chain_id);
        }
        // Successful registration implies the switch.
        g.chain_id = target.chain_id;
        Ok(())
    }

    fn balance_of(&self, account: Address) -> Result<U256, PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            return Err(PortError::NotImplemented(
                "browser balance read requires wasm_balance_of_async",
            ));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if matches!(self.mode, ProviderMode::Proxy(_)) {
            let result =
                self.proxy_call("eth_getBalance", json!([account.to_string(), "latest"]))?;
            return wire::json_to_u256(&result);
        }

        self.record("eth_getBalance")?;
        let g = self.lock()?;
        if g.fail_balance_reads {
            return Err(PortError::Transport(
                "balance read unavailable".to_owned(),
            ));
        }
        Ok(g.balances.get(&account).copied().unwrap_or_default())
    }

    fn estimate_gas(&self, tx_payload: &Value) -> Result<U256, PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            return Err(PortError::NotImplemented(
                "browser gas estimation requires wasm_estimate_gas_async",
            ));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if matches!(self.mode, ProviderMode::Proxy(_)) {
            let result = self.proxy_call("eth_estimateGas", json!([tx_payload]))?;
            return wire::json_to_u256(&result);
        }

        let _ = tx_payload;
        self.record("eth_estimateGas")?;
        Ok(U256::from(21_000u64))
    }

    fn gas_price(&self) -> Result<U256, PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            return Err(PortError::NotImplemented(
                "browser gas price query requires wasm_gas_price_async",
            ));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if matches!(self.mode, ProviderMode::Proxy(_)) {
            let result = self.proxy_call("eth_gasPrice", json!([]))?;
            return wire::json_to_u256(&result);
        }

        self.record("eth_gasPrice")?;
        Ok(self.lock()?.gas_price)
    }

    fn send_transaction(&self, tx_payload: &Value) -> Result<B256, PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            return Err(PortError::NotImplemented(
                "browser transaction submission requires wasm_send_transaction_async",
            ));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if matches!(self.mode, ProviderMode::Proxy(_)) {
            let result = self.proxy_call("eth_sendTransaction", json!([tx_payload]))?;
            return wire::json_to_b256(&result);
        }

        self.record("eth_sendTransaction")?;
        let mut g = self.lock()?;
        if let Some((code, message)) = g.scripted_send_failure.clone() {
            return Err(PortError::Rpc { code, message });
        }
        let canonical = serde_json::to_vec(tx_payload)
            .map_err(|e| PortError::Validation(format!("tx payload serialization failed: {e}")))?;
        g.sent.push(tx_payload.clone());
        Ok(keccak256(canonical))
    }

    fn await_confirmation(&self, transaction_id: B256) -> Result<(), PortError> {
        self.check_mode()?;

        #[cfg(target_arch = "wasm32")]
        if matches!(self.mode, ProviderMode::Browser) {
            return Err(PortError::NotImplemented(
                "browser receipt polling requires wasm_await_confirmation_async",
            ));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let ProviderMode::Proxy(ref proxy) = self.mode {
            let interval = std::time::Duration::from_millis(proxy.poll_interval_ms);
            loop {
                let receipt = self.proxy_call(
                    "eth_getTransactionReceipt",
                    json!([transaction_id.to_string()]),
                )?;
                if !receipt.is_null() {
                    return Ok(());
                }
                std::thread::sleep(interval);
            }
        }

        let _ = transaction_id;
        self.record("eth_getTransactionReceipt")?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl Eip1193Adapter {
    pub async fn wasm_authorized_accounts_async(&self) -> Result<Vec<Address>, PortError> {
        self.check_mode()?;
        let result = self.wasm_request("eth_accounts", json!([])).await?;
        let accounts = wire::json_to_accounts(&result)?;
        let mut g = self.lock()?;
        if !accounts.is_empty() {
            g.wallet_accounts = accounts.clone();
            g.authorized = true;
        }
        Ok(accounts)
    }

    pub async fn wasm_request_accounts_async(&self) -> Result<Vec<Address>, PortError> {
        self.check_mode()?;
        let result = self.wasm_request("eth_requestAccounts", json!([])).await?;
        let accounts = wire::json_to_accounts(&result)?;
        let mut g = self.lock()?;
        g.wallet_accounts = accounts.clone();
        g.authorized = !accounts.is_empty();
        Ok(accounts)
    }

    pub async fn wasm_chain_id_async(&self) -> Result<u64, PortError> {
        self.check_mode()?;
        let result = self.wasm_request("eth_chainId", json!([])).await?;
        let chain_id = wire::json_chain_id_to_u64(&result)?;
        self.lock()?.chain_id = chain_id;
        Ok(chain_id)
    }

    pub async fn wasm_switch_chain_async(&self, chain_id: u64) -> Result<(), PortError> {
        self.check_mode()?;
        let params = json!([{ "chainId": format!("0x{chain_id:x}") }]);
        self.wasm_request("wallet_switchEthereumChain", params)
            .await?;
        self.lock()?.chain_id = chain_id;
        Ok(())
    }

    pub async fn wasm_add_chain_async(&self, target: &ChainTarget) -> Result<(), PortError> {
        self.check_mode()?;
        self.wasm_request("wallet_addEthereumChain", json!([target.add_chain_params()]))
            .await?;
        self.lock()?.chain_id = target.chain_id;
        Ok(())
    }

    pub async fn wasm_balance_of_async(&self, account: Address) -> Result<U256, PortError> {
        self.check_mode()?;
        let result = self
            .wasm_request("eth_getBalance", json!([account.to_string(), "latest"]))
            .await?;
        wire::json_to_u256(&result)
    }

    pub async fn wasm_estimate_gas_async(&self, tx_payload: &Value) -> Result<U256, PortError> {
        self.check_mode()?;
        let result = self.wasm_request("eth_estimateGas", json!([tx_payload])).await?;
        wire::json_to_u256(&result)
    }

    pub async fn wasm_gas_price_async(&self) -> Result<U256, PortError> {
        self.check_mode()?;
        let result = self.wasm_request("eth_gasPrice", json!([])).await?;
        wire::json_to_u256(&result)
    }

    pub async fn wasm_send_transaction_async(&self, tx_payload: &Value) -> Result<B256, PortError> {
        self.check_mode()?;
        let result = self
            .wasm_request("eth_sendTransaction", json!([tx_payload]))
            .await?;
        wire::json_to_b256(&result)
    }

    pub async fn wasm_await_confirmation_async(
        &self,
        transaction_id: B256,
        poll_interval_ms: i32,
    ) -> Result<(), PortError> {
        self.check_mode()?;
        loop {
            let receipt = self
                .wasm_request(
                    "eth_getTransactionReceipt",
                    json!([transaction_id.to_string()]),
                )
                .await?;
            if !receipt.is_null() {
                return Ok(());
            }
            wasm_sleep(poll_interval_ms).await;
        }
    }

    async fn wasm_request(&self, method: &str, params: Value) -> Result<Value, PortError> {
        use wasm_bindgen::JsCast;

        let provider = browser_provider()?;
        let request_fn = get_prop(&provider, "request")
            .ok()
            .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
            .ok_or(PortError::NotImplemented(
                "window.ethereum.request is unavailable",
            ))?;

        let request = json!({
            "method": method,
            "params": params,
        });
        let request_js = serde_wasm_bindgen::to_value(&request)
            .map_err(|e| PortError::Transport(format!("failed to encode wasm request: {e}")))?;
        let promise_js = request_fn.call1(&provider, &request_js).map_err(|e| {
            PortError::Transport(format!("provider request dispatch failed: {e:?}"))
        })?;
        let promise = promise_js.dyn_into::<js_sys::Promise>().map_err(|_| {
            PortError::Transport("provider request did not return Promise".to_owned())
        })?;
        let result_js = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| {
                match serde_wasm_bindgen::from_value::<Value>(e.clone()) {
                    Ok(err) => wire::rpc_error(&err),
                    Err(_) => PortError::Transport(format!("provider request rejected: {e:?}")),
                }
            })?;
        serde_wasm_bindgen::from_value(result_js)
            .map_err(|e| PortError::Transport(format!("failed to decode wasm response: {e}")))
    }

    fn refresh_browser_snapshot(&self) -> Result<(), PortError> {
        use wasm_bindgen::JsValue;

        let provider = browser_provider()?;
        let selected = get_prop(&provider, "selectedAddress").unwrap_or(JsValue::NULL);
        let chain = get_prop(&provider, "chainId").unwrap_or(JsValue::NULL);

        let mut g = self.lock()?;

        if let Some(raw) = selected.as_string() {
            let parsed: Address = raw
                .parse()
                .map_err(|e| PortError::Validation(format!("invalid selectedAddress: {e}")))?;
            g.wallet_accounts = vec![parsed];
            g.authorized = true;
        }

        if !chain.is_null() && !chain.is_undefined() {
            g.chain_id = js_chain_id_to_u64(chain)?;
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
async fn wasm_sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        match web_sys::window() {
            Some(window) => {
                if window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                    .is_err()
                {
                    let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
                }
            }
            None => {
                let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
            }
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(target_arch = "wasm32")]
fn browser_provider_available() -> bool {
    browser_provider().is_ok()
}

#[cfg(target_arch = "wasm32")]
fn browser_provider() -> Result<wasm_bindgen::JsValue, PortError> {
    let window = web_sys::window()
        .ok_or_else(|| PortError::Transport("missing window".to_owned()))?;
    let provider = get_prop(&window.into(), "ethereum")?;
    if provider.is_null() || provider.is_undefined() {
        return Err(PortError::Unavailable("window.ethereum missing".to_owned()));
    }
    Ok(provider)
}

#[cfg(target_arch = "wasm32")]
fn get_prop(target: &wasm_bindgen::JsValue, key: &str) -> Result<wasm_bindgen::JsValue, PortError> {
    js_sys::Reflect::get(target, &wasm_bindgen::JsValue::from_str(key))
        .map_err(|e| PortError::Transport(format!("read provider property {key} failed: {e:?}")))
}

#[cfg(target_arch = "wasm32")]
fn js_chain_id_to_u64(value: wasm_bindgen::JsValue) -> Result<u64, PortError> {
    if let Some(raw) = value.as_string() {
        return wire::parse_chain_id_str(&raw);
    }
    if let Some(num) = value.as_f64() {
        return Ok(num as u64);
    }
    Err(PortError::Validation("invalid JS chain id".to_owned()))
}
