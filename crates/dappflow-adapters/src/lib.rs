pub mod clock;
pub mod config;
pub mod eip1193;
#[cfg(not(target_arch = "wasm32"))]
pub mod rpc;
mod wire;

pub use clock::SystemClockAdapter;
pub use config::{AdapterConfig, RuntimeProfile};
pub use eip1193::Eip1193Adapter;
#[cfg(not(target_arch = "wasm32"))]
pub use rpc::RpcFallbackAdapter;
