//! # Unit Conversion
//!
//! Conversion between raw on-chain integers (wei) and the strings shown to the
//! user, plus JSON-RPC hex quantity encoding.
//!
//! Display formatting matches what wallet UIs commonly show: trailing zeros of
//! the fractional part are trimmed but at least one fractional digit is kept.
//!
//! ```rust
//! use shared::units::{format_ether, parse_quantity, to_quantity};
//! use alloy_primitives::U256;
//!
//! assert_eq!(format_ether(U256::ZERO), "0.0");
//! assert_eq!(parse_quantity("0x3e8").unwrap(), U256::from(1000u64));
//! assert_eq!(to_quantity(U256::from(1000u64)), "0x3e8");
//! ```

use alloy_primitives::U256;
use thiserror::Error;

/// Decimals of the chain's native currency (1 ether = 10^18 wei).
pub const ETHER_DECIMALS: u8 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("invalid hex quantity: {0}")]
    InvalidQuantity(String),
}

/// Format `value` (in the smallest unit) as a decimal string with `decimals` places.
pub fn format_units(value: U256, decimals: u8) -> String {
    let base = U256::from(10u64).pow(U256::from(decimals));
    let integer = value / base;
    let fraction = value % base;

    let mut fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    while fraction.len() > 1 && fraction.ends_with('0') {
        fraction.pop();
    }

    format!("{}.{}", integer, fraction)
}

/// Format a wei amount as ether.
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

/// Parse a JSON-RPC quantity such as `"0x3e8"`. An empty `"0x"` is zero.
pub fn parse_quantity(quantity: &str) -> Result<U256, UnitsError> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .ok_or_else(|| UnitsError::InvalidQuantity(quantity.to_string()))?;

    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 16).map_err(|_| UnitsError::InvalidQuantity(quantity.to_string()))
}

/// Encode a value as a JSON-RPC quantity (`0x`-prefixed, no leading zeros).
pub fn to_quantity(value: U256) -> String {
    format!("{:#x}", value)
}
