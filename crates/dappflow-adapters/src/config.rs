#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeProfile {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub runtime_profile: RuntimeProfile,
    /// JSON-RPC endpoint standing in for the injected provider on native
    /// targets. `None` selects the deterministic provider outside production.
    pub eip1193_proxy_url: Option<String>,
    pub provider_timeout_ms: u64,
    pub fallback_timeout_ms: u64,
    pub confirmation_poll_interval_ms: u64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            runtime_profile: RuntimeProfile::Development,
            eip1193_proxy_url: None,
            provider_timeout_ms: 15_000,
            fallback_timeout_ms: 10_000,
            confirmation_poll_interval_ms: 1_000,
        }
    }
}

impl AdapterConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(profile) = std::env::var("DAPPFLOW_PROFILE") {
            if profile.eq_ignore_ascii_case("production") {
                config.runtime_profile = RuntimeProfile::Production;
            }
        }
        if let Ok(url) = std::env::var("DAPPFLOW_EIP1193_PROXY_URL") {
            if !url.is_empty() {
                config.eip1193_proxy_url = Some(url);
            }
        }
        if let Some(ms) = env_ms("DAPPFLOW_PROVIDER_TIMEOUT_MS") {
            config.provider_timeout_ms = ms;
        }
        if let Some(ms) = env_ms("DAPPFLOW_FALLBACK_TIMEOUT_MS") {
            config.fallback_timeout_ms = ms;
        }
        if let Some(ms) = env_ms("DAPPFLOW_CONFIRMATION_POLL_INTERVAL_MS") {
            config.confirmation_poll_interval_ms = ms;
        }
        config
    }

    pub fn strict_runtime_required(&self) -> bool {
        self.runtime_profile == RuntimeProfile::Production
    }
}

fn env_ms(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.parse().ok()
}
