use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::curve::{self, BondingCurveConfig, Greeks};
use crate::error::Result;
use crate::feed::DeployEvent;

const NANOTONS_PER_TON: f64 = 1_000_000_000.0;

/// One launched token as observed in the launchpad's transaction history.
/// Priced once at construction from the bonding curve; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenObservation {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub unit_price: u64,
    pub market_cap: f64,
    pub value_ton: f64,
    pub launch_time: DateTime<Utc>,
    pub greeks: Greeks,
}

impl TokenObservation {
    pub fn derive(config: &BondingCurveConfig, event: DeployEvent) -> Result<Self> {
        let unit_price = curve::price_at(config, event.total_supply)?;
        let market_cap = curve::market_cap(config, event.total_supply)?;
        let greeks = curve::derive_scalars(config, event.total_supply)?;

        Ok(Self {
            address: event.address,
            name: event.name,
            symbol: event.symbol,
            total_supply: event.total_supply,
            unit_price,
            market_cap,
            value_ton: unit_price as f64 / NANOTONS_PER_TON,
            launch_time: event.timestamp,
            greeks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_derive_prices_once_from_event() {
        let config = BondingCurveConfig {
            initial_price: 1_000_000,
            price_increment: 1_000_000,
        };
        let event = DeployEvent {
            address: "EQDNtSKblX4-stYHbJj0gzXvbxN4Dz0je7rk1-I73REFABrh".to_string(),
            name: "Meme".to_string(),
            symbol: "MEME".to_string(),
            total_supply: 3,
            timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };

        let token = TokenObservation::derive(&config, event).unwrap();
        assert_eq!(token.unit_price, 4_000_000);
        assert_eq!(token.market_cap, 12_000_000.0);
        assert!((token.value_ton - 0.004).abs() < 1e-12);
        assert_eq!(token.greeks.delta, Some(1.0));
    }
}
