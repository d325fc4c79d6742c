//! Application constants

use alloy_primitives::{address, Address};

/// Deployed lottery contract
pub const CONTRACT_ADDRESS: Address = address!("0x3cf7d69f4b53cf97410df79810ef1f0b5b388889");

/// Value sent with `enter()`, in wei
pub const ENTRY_FEE_WEI: u64 = 1000;

// UI constants
pub const CELEBRATION_MS: u32 = 5000;
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 1000;

// Alert texts
pub const INSTALL_WALLET_MSG: &str = "Please install MetaMask!";
pub const ENTERED_MSG: &str = "Successfully entered the lottery!";
pub const ENTER_FAILED_MSG: &str = "Failed to enter the lottery.";
pub const WINNER_PICKED_MSG: &str = "Winner has been picked!";
pub const NOT_OWNER_MSG: &str = "You might not be the contract owner.";
