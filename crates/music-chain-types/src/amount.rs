use alloy_primitives::U256;
use std::fmt;
use std::str::FromStr;

use crate::units::{format_units, parse_units};
use crate::AmountError;

/// Fractional digits of the native unit.
pub const NATIVE_DECIMALS: u8 = 18;

/// Non-negative quantity of the chain's native unit, held in the smallest unit (wei).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(U256);

impl Amount {
    pub const ZERO: Self = Self(U256::ZERO);

    pub const fn from_wei(wei: U256) -> Self {
        Self(wei)
    }

    pub const fn wei(&self) -> U256 {
        self.0
    }

    /// Parse a human-readable native amount such as `0.0066`.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        parse_units(s, NATIVE_DECIMALS).map(Self)
    }

    /// `self - other`, or `None` when `other` is larger.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_units(self.0, NATIVE_DECIMALS))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
