use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Linear bonding curve: unit price = initial_price + total_supply * price_increment.
/// All monetary values are in nanotons so pricing stays exact integer arithmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BondingCurveConfig {
    pub initial_price: u64,
    pub price_increment: u64,
}

impl Default for BondingCurveConfig {
    fn default() -> Self {
        // Launchpad contract constants.
        Self {
            initial_price: 1_000_000,
            price_increment: 1_000_000,
        }
    }
}

/// Per-token ranking scalars derived from the curve at a given supply.
/// `None` marks a scalar that is undefined at zero supply; display layers
/// render it as "N/A" instead of propagating an infinity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Greeks {
    pub alpha: Option<f64>,
    pub beta: f64,
    pub gamma: Option<f64>,
    pub delta: Option<f64>,
    pub epsilon: Option<f64>,
}

/// Current unit price at the given supply, exact in nanotons.
pub fn price_at(config: &BondingCurveConfig, total_supply: u64) -> Result<u64> {
    total_supply
        .checked_mul(config.price_increment)
        .and_then(|scaled| config.initial_price.checked_add(scaled))
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "unit price overflows at supply {}",
                total_supply
            ))
        })
}

/// Cost of buying `amount` units at the current supply. Zero amount costs zero.
pub fn cost_to_buy(config: &BondingCurveConfig, total_supply: u64, amount: u64) -> Result<u64> {
    let unit_price = price_at(config, total_supply)?;
    unit_price.checked_mul(amount).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "cost overflows for amount {} at unit price {}",
            amount, unit_price
        ))
    })
}

/// Market cap at the given supply (unit price * supply, as a display float).
pub fn market_cap(config: &BondingCurveConfig, total_supply: u64) -> Result<f64> {
    let unit_price = price_at(config, total_supply)?;
    Ok(unit_price as f64 * total_supply as f64)
}

/// Derives the five ranking scalars at the given supply.
///
/// Note on delta: its formula divides the unit price by the curve expression
/// that defines the unit price, so it evaluates to 1.0 for every token with
/// non-zero supply. The metric is carried over from the launchpad frontend
/// as-is; do not simplify it away.
pub fn derive_scalars(config: &BondingCurveConfig, total_supply: u64) -> Result<Greeks> {
    let unit_price = price_at(config, total_supply)?;
    let beta = config.price_increment as f64;

    if total_supply == 0 {
        return Ok(Greeks {
            alpha: None,
            beta,
            gamma: None,
            delta: None,
            epsilon: None,
        });
    }

    let supply = total_supply as f64;
    let alpha = Some(unit_price as f64 / supply);
    let gamma = Some(2.0 * config.price_increment as f64 / supply);

    let denominator = config.initial_price as f64 + supply * config.price_increment as f64;
    let delta = if denominator == 0.0 {
        None
    } else {
        Some(unit_price as f64 / denominator)
    };

    let epsilon = if unit_price == 0 {
        None
    } else {
        Some(supply * config.price_increment as f64 / unit_price as f64)
    };

    Ok(Greeks {
        alpha,
        beta,
        gamma,
        delta,
        epsilon,
    })
}
