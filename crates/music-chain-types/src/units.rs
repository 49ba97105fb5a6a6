//! Fixed-point conversion between smallest-unit integers and decimal strings.

use alloy_primitives::U256;

use crate::AmountError;

/// `10^decimals`. Callers keep `decimals <= 77` so the result fits in 256 bits.
pub(crate) fn pow10(decimals: u8) -> U256 {
    let ten = U256::from(10u8);
    (0..decimals).fold(U256::from(1u8), |acc, _| acc * ten)
}

/// Render `value` scaled down by `10^decimals`.
///
/// Trailing fractional zeros are trimmed but one fractional digit is always
/// kept, so `10^18` with 18 decimals renders as `1.0`.
pub fn format_units(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    let base = pow10(decimals);
    let whole = value / base;
    let frac = (value % base).to_string();

    let mut digits = format!("{frac:0>width$}", width = decimals as usize);
    let kept = digits.trim_end_matches('0').len().max(1);
    digits.truncate(kept);
    format!("{whole}.{digits}")
}

/// Parse a non-negative decimal string into its smallest-unit integer.
///
/// Rejects signs, exponents, separators and more than `decimals` fractional
/// digits; never rounds.
pub fn parse_units(input: &str, decimals: u8) -> Result<U256, AmountError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }
    if s.starts_with('-') {
        return Err(AmountError::Negative);
    }

    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() || (s.contains('.') && frac.is_empty()) {
        return Err(AmountError::InvalidFormat(s.to_string()));
    }
    if frac.len() > decimals as usize {
        return Err(AmountError::TooPrecise {
            max_decimals: decimals,
        });
    }

    let whole = parse_digits(whole, s)?;
    let padded = format!("{frac:0<width$}", width = decimals as usize);
    let frac = parse_digits(&padded, s)?;

    whole
        .checked_mul(pow10(decimals))
        .and_then(|scaled| scaled.checked_add(frac))
        .ok_or(AmountError::Overflow)
}

fn parse_digits(digits: &str, original: &str) -> Result<U256, AmountError> {
    let ten = U256::from(10u8);
    digits.chars().try_fold(U256::ZERO, |acc, c| {
        let d = c
            .to_digit(10)
            .ok_or_else(|| AmountError::InvalidFormat(original.to_string()))?;
        acc.checked_mul(ten)
            .and_then(|v| v.checked_add(U256::from(d)))
            .ok_or(AmountError::Overflow)
    })
}
