//! Shared types and pure-logic utilities for the music-chain checks.
//! No networking; usable by any tool that talks to the chain.

mod account;
mod amount;
mod error;
mod fiat;
mod units;

pub use account::{parse_address, Account};
pub use amount::{Amount, NATIVE_DECIMALS};
pub use error::{AddressError, AmountError};
pub use fiat::{FiatAmount, FiatRate};
pub use units::{format_units, parse_units};

pub use alloy_primitives::{Address, U256};
