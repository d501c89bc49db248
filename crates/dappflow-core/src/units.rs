//! Decimal display-unit <-> minimal-unit conversion.
//!
//! All conversion is integer arithmetic over `U256`; amounts never pass
//! through floating point, so `1.5` at 18 decimals is exactly
//! `1500000000000000000`.

use alloy::primitives::utils::{format_units, parse_units};
use alloy::primitives::U256;

use crate::ports::PortError;

/// Balance shown when every read path has failed.
pub const ZERO_BALANCE: &str = "0.000000";

const DISPLAY_DECIMALS: u8 = 6;

/// Parses a decimal display amount into the chain's minimal unit. Rejects
/// empty, signed, zero, and malformed inputs.
pub fn to_minimal_units(amount: &str, decimals: u8) -> Result<U256, PortError> {
    let raw = amount.trim();
    if raw.is_empty() || raw.starts_with('-') || raw.starts_with('+') {
        return Err(PortError::Validation(format!(
            "amount must be an unsigned decimal number, got '{raw}'"
        )));
    }
    let parsed = parse_units(raw, decimals)
        .map_err(|e| PortError::Validation(format!("invalid amount '{raw}': {e}")))?;
    let minimal = parsed.get_absolute();
    if minimal.is_zero() {
        return Err(PortError::Validation(
            "amount must be greater than zero".to_owned(),
        ));
    }
    Ok(minimal)
}

/// Full-precision decimal rendering of a minimal-unit amount.
pub fn from_minimal_units(amount: U256, decimals: u8) -> Result<String, PortError> {
    format_units(amount, decimals)
        .map_err(|e| PortError::Validation(format!("amount formatting failed: {e}")))
}

/// Fixed six-fractional-digit balance display, truncating below the sixth
/// place. `U256::ZERO` renders as [`ZERO_BALANCE`].
pub fn format_native(amount: U256, decimals: u8) -> String {
    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / scale;
    let rem = amount % scale;
    let frac = if decimals >= DISPLAY_DECIMALS {
        rem / U256::from(10u64).pow(U256::from(decimals - DISPLAY_DECIMALS))
    } else {
        rem * U256::from(10u64).pow(U256::from(DISPLAY_DECIMALS - decimals))
    };
    format!("{whole}.{:0>6}", frac.to_string())
}
