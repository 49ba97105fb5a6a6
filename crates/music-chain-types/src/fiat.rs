//! Fiat estimates at cent precision.

use alloy_primitives::U256;
use std::fmt;

use crate::units::{parse_units, pow10};
use crate::{Amount, AmountError, NATIVE_DECIMALS};

const CENT_DECIMALS: u8 = 2;

/// Largest accepted rate, in cents per native unit.
const MAX_RATE_CENT_DIGITS: u8 = 18;

/// Fiat price of one whole native unit, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatRate {
    cents_per_unit: U256,
}

impl FiatRate {
    pub fn from_cents(cents_per_unit: u64) -> Self {
        Self {
            cents_per_unit: U256::from(cents_per_unit),
        }
    }

    /// Parse a rate such as `1270` or `1270.50`; at most 10^16 per unit.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        let cents_per_unit = parse_units(s, CENT_DECIMALS)?;
        if cents_per_unit > pow10(MAX_RATE_CENT_DIGITS) {
            return Err(AmountError::ExceedsLimit("fiat rate above 10^16 per unit"));
        }
        Ok(Self { cents_per_unit })
    }

    /// Fiat value of `amount`, rounded half-up to the cent.
    pub fn estimate(&self, amount: Amount) -> Result<FiatAmount, AmountError> {
        let base = pow10(NATIVE_DECIMALS);
        let whole = amount.wei() / base;
        let rest = amount.wei() % base;

        let rounded = rest
            .checked_mul(self.cents_per_unit)
            .and_then(|v| v.checked_add(base / U256::from(2u8)))
            .ok_or(AmountError::Overflow)?
            / base;
        let cents = whole
            .checked_mul(self.cents_per_unit)
            .and_then(|v| v.checked_add(rounded))
            .ok_or(AmountError::Overflow)?;
        Ok(FiatAmount { cents })
    }
}

impl fmt::Display for FiatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_amount = FiatAmount {
            cents: self.cents_per_unit,
        };
        fmt::Display::fmt(&as_amount, f)
    }
}

/// Fiat amount in cents; displays with exactly two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FiatAmount {
    cents: U256,
}

impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundred = U256::from(100u8);
        let whole = self.cents / hundred;
        let frac = (self.cents % hundred).as_limbs()[0];
        write!(f, "{whole}.{frac:02}")
    }
}
