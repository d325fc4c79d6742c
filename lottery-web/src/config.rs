//! # Configuration
//!
//! Defaults come from [`crate::utils::constants`]. Any of them can be
//! overridden through the page URL, which is handy when pointing the same
//! build at a local devnet deployment:
//!
//! ```text
//! http://127.0.0.1:8080/?contract=0x5FbDB2315678afecb367f032d93F642f64180aa3&poll_ms=250
//! ```
//!
//! | Parameter        | Field                |
//! |------------------|----------------------|
//! | `contract`       | `contract_address`   |
//! | `entry_fee_wei`  | `entry_fee`          |
//! | `celebration_ms` | `celebration_ms`     |
//! | `poll_ms`        | `receipt_poll_ms`    |
//!
//! A malformed override is logged and ignored.

use std::collections::HashMap;
use std::str::FromStr;

use alloy_primitives::{Address, U256};

use crate::utils::constants::{
    CELEBRATION_MS, CONTRACT_ADDRESS, ENTRY_FEE_WEI, RECEIPT_POLL_INTERVAL_MS,
};
use crate::utils::url::get_query_params;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LotteryConfig {
    pub contract_address: Address,
    pub entry_fee: U256,
    pub celebration_ms: u32,
    pub receipt_poll_ms: u32,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            contract_address: CONTRACT_ADDRESS,
            entry_fee: U256::from(ENTRY_FEE_WEI),
            celebration_ms: CELEBRATION_MS,
            receipt_poll_ms: RECEIPT_POLL_INTERVAL_MS,
        }
    }
}

impl LotteryConfig {
    /// Defaults overridden by the current page's query string.
    pub fn from_location() -> Self {
        Self::from_params(&get_query_params())
    }

    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            contract_address: override_or(params, "contract", defaults.contract_address),
            entry_fee: override_or(params, "entry_fee_wei", defaults.entry_fee),
            celebration_ms: override_or(params, "celebration_ms", defaults.celebration_ms),
            receipt_poll_ms: override_or(params, "poll_ms", defaults.receipt_poll_ms),
        }
    }
}

fn override_or<T: FromStr>(params: &HashMap<String, String>, key: &str, default: T) -> T {
    match params.get(key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("[CONFIG] Ignoring malformed `{}` override: {:?}", key, raw);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = LotteryConfig::default();
        assert_eq!(
            config.contract_address.to_string().to_lowercase(),
            "0x3cf7d69f4b53cf97410df79810ef1f0b5b388889"
        );
        assert_eq!(config.entry_fee, U256::from(1000u64));
        assert_eq!(config.celebration_ms, 5000);
    }

    #[test]
    fn test_overrides() {
        let config = LotteryConfig::from_params(&params(&[
            ("contract", "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            ("entry_fee_wei", "42"),
            ("celebration_ms", "100"),
            ("poll_ms", "250"),
        ]));
        assert_eq!(
            config.contract_address,
            Address::from_str("0x5FbDB2315678afecb367f032d93F642f64180aa3").unwrap()
        );
        assert_eq!(config.entry_fee, U256::from(42u64));
        assert_eq!(config.celebration_ms, 100);
        assert_eq!(config.receipt_poll_ms, 250);
    }

    #[test]
    fn test_malformed_overrides_fall_back() {
        let config = LotteryConfig::from_params(&params(&[
            ("contract", "not-an-address"),
            ("celebration_ms", "-1"),
        ]));
        assert_eq!(config, LotteryConfig::default());
    }
}
