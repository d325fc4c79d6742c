//! # Formatting Utilities for the Lottery Page
//!
//! Display strings built from on-chain values. Unit conversion itself lives in
//! [`shared::units`]; address shortening in [`shared::utils`].

use alloy_primitives::U256;

/// Balance line value, e.g. `"0.000000000000003 ETH"`.
pub fn format_balance(balance: &str) -> String {
    format!("{} ETH", balance)
}

/// Label of the enter button when idle.
pub fn enter_label(entry_fee_wei: U256) -> String {
    format!("Enter Lottery ({} wei)", entry_fee_wei)
}

/// Wallet line value.
pub fn format_account(account: &str) -> String {
    if account.is_empty() {
        "Not connected".to_string()
    } else {
        account.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance("0.0"), "0.0 ETH");
    }

    #[test]
    fn test_enter_label() {
        assert_eq!(enter_label(U256::from(1000u64)), "Enter Lottery (1000 wei)");
    }

    #[test]
    fn test_format_account() {
        assert_eq!(format_account(""), "Not connected");
        assert_eq!(format_account("0xabc"), "0xabc");
    }
}
