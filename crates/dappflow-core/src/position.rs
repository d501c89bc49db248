//! Liquidity-position planning: amount parsing, canonical token ordering, and
//! price-to-tick conversion for the fixed fee tiers.

use alloy::primitives::{Address, U256};

use crate::domain::TokenInfo;
use crate::ports::PortError;
use crate::units;

/// Global tick bounds of the v3 core contracts.
pub const MIN_TICK: i32 = -887_272;
pub const MAX_TICK: i32 = 887_272;

const TICK_BASE: f64 = 1.0001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionPlan {
    pub sender: Address,
    pub token0: TokenInfo,
    pub token1: TokenInfo,
    /// Fee tier in hundredths of a basis point (500, 3000, or 10000).
    pub fee: u32,
    pub amount0: String,
    pub amount1: String,
    pub price_lower: String,
    pub price_upper: String,
}

/// The plan with tokens in pool-canonical order (ascending address) and
/// amounts parsed to minimal units, swapped to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedMint {
    pub token0: TokenInfo,
    pub token1: TokenInfo,
    pub amount0: U256,
    pub amount1: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRange {
    pub lower: i32,
    pub upper: i32,
}

impl PositionPlan {
    pub fn ordered(&self) -> Result<OrderedMint, PortError> {
        if self.token0.address == self.token1.address {
            return Err(PortError::Validation(
                "position tokens must differ".to_owned(),
            ));
        }
        let amount0 = units::to_minimal_units(&self.amount0, self.token0.decimals)?;
        let amount1 = units::to_minimal_units(&self.amount1, self.token1.decimals)?;
        if self.token0.address < self.token1.address {
            Ok(OrderedMint {
                token0: self.token0,
                token1: self.token1,
                amount0,
                amount1,
            })
        } else {
            Ok(OrderedMint {
                token0: self.token1,
                token1: self.token0,
                amount0: amount1,
                amount1: amount0,
            })
        }
    }

    pub fn tick_range(&self) -> Result<TickRange, PortError> {
        let lower = parse_price(&self.price_lower)?;
        let upper = parse_price(&self.price_upper)?;
        if upper <= lower {
            return Err(PortError::Validation(
                "upper price must exceed lower price".to_owned(),
            ));
        }
        let spacing = tick_spacing(self.fee)?;
        let range = TickRange {
            lower: tick_from_price(lower, spacing, Rounding::Down),
            upper: tick_from_price(upper, spacing, Rounding::Up),
        };
        if range.lower >= range.upper {
            return Err(PortError::Validation(
                "price range collapses to an empty tick range".to_owned(),
            ));
        }
        Ok(range)
    }
}

pub fn tick_spacing(fee: u32) -> Result<i32, PortError> {
    match fee {
        500 => Ok(10),
        3000 => Ok(60),
        10_000 => Ok(200),
        other => Err(PortError::Validation(format!(
            "unsupported fee tier: {other}"
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rounding {
    Down,
    Up,
}

/// tick = log(price) / log(1.0001), aligned outward to the tier's tick
/// spacing and clamped to the spacing-aligned usable bounds.
fn tick_from_price(price: f64, spacing: i32, rounding: Rounding) -> i32 {
    let raw = price.ln() / TICK_BASE.ln();
    let tick = match rounding {
        Rounding::Down => raw.floor() as i32,
        Rounding::Up => raw.ceil() as i32,
    };
    let aligned = match rounding {
        Rounding::Down => tick.div_euclid(spacing) * spacing,
        Rounding::Up => {
            let floored = tick.div_euclid(spacing) * spacing;
            if floored == tick {
                floored
            } else {
                floored + spacing
            }
        }
    };
    let max_usable = MAX_TICK.div_euclid(spacing) * spacing;
    let min_usable = {
        let floored = MIN_TICK.div_euclid(spacing) * spacing;
        if floored == MIN_TICK {
            floored
        } else {
            floored + spacing
        }
    };
    aligned.clamp(min_usable, max_usable)
}

fn parse_price(raw: &str) -> Result<f64, PortError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|e| PortError::Validation(format!("invalid price '{raw}': {e}")))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(PortError::Validation(format!(
            "price must be a positive finite number, got '{raw}'"
        )));
    }
    Ok(price)
}
