use alloy_primitives::Address;
use std::str::FromStr;

use crate::AddressError;

/// An externally owned account the process can act as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Account {
    pub address: Address,
}

impl Account {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

/// Parse a `0x`-prefixed (or bare) 40-hex-character address.
///
/// Letter case is ignored: mixed-case input is not checked against its
/// EIP-55 checksum, so `0xABC…` and `0xabc…` yield the same [`Address`].
pub fn parse_address(s: &str) -> Result<Address, AddressError> {
    let trimmed = s.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.len() != 40 {
        return Err(AddressError::InvalidLength(hex.len()));
    }
    Address::from_str(hex).map_err(|e| AddressError::InvalidHex(e.to_string()))
}
