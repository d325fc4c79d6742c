//! # Shared Utility Functions
//!
//! Common utility functions used by the lottery frontend.
//!
//! ## Address Formatting
//!
//! Functions for formatting Ethereum addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `0x` plus 4 leading and 4 trailing hex digits
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x3cf7d69f4b53cf97410df79810ef1f0b5b388889";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x3cf7...8889");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Arguments
///
/// * `address` - The wallet address to format
/// * `prefix_len` - Number of characters to show at the start (including `0x`)
/// * `suffix_len` - Number of characters to show at the end
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x3cf7d69f4b53cf97410df79810ef1f0b5b388889";
/// assert_eq!(format_address(addr, 6, 4), "0x3cf7...8889");
/// assert_eq!(format_address(addr, 8, 6), "0x3cf7d6...388889");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    // Hex addresses are ASCII, byte indexing is char indexing
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address as `0x` plus four leading and four trailing hex digits.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x3cf7d69f4b53cf97410df79810ef1f0b5b388889";
/// assert_eq!(truncate_address(addr), "0x3cf7...8889");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
