//! Typed contract bindings.
//!
//! A binding pairs a [`ChainReader`] with a contract address and exposes the
//! contract's view functions as typed methods.

use alloy_primitives::keccak256;
use music_chain_types::Address;

use crate::chain::ChainReader;
use crate::Error;

const OWNER_SIGNATURE: &str = "owner()";

/// ABI word size.
const WORD: usize = 32;

/// Contracts that record a privileged owner.
#[allow(async_fn_in_trait)]
pub trait Ownable {
    async fn owner(&self) -> Result<Address, Error>;
}

/// Handle to a deployed `Ownable` contract.
pub struct OwnableContract<'a, C> {
    client: &'a C,
    address: Address,
}

impl<'a, C: ChainReader> OwnableContract<'a, C> {
    pub fn at(client: &'a C, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl<C: ChainReader> Ownable for OwnableContract<'_, C> {
    async fn owner(&self) -> Result<Address, Error> {
        let data = self.client.call(self.address, &selector(OWNER_SIGNATURE)).await?;
        decode_address(&data)
            .map_err(|e| Error::InvalidResponse(format!("owner() at {}: {e}", self.address)))
    }
}

/// First four bytes of the keccak hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// Decode a single ABI-encoded `address` return value.
pub fn decode_address(data: &[u8]) -> Result<Address, String> {
    if data.is_empty() {
        return Err("empty return data (no contract at this address?)".into());
    }
    if data.len() < WORD {
        return Err(format!("expected {WORD} bytes, got {}", data.len()));
    }
    let word = &data[..WORD];
    if word[..12].iter().any(|b| *b != 0) {
        return Err("return value is not an address".into());
    }
    Ok(Address::from_slice(&word[12..]))
}

/// ABI-encode an address as a 32-byte word.
pub fn encode_address(address: Address) -> Vec<u8> {
    let mut word = vec![0u8; WORD];
    word[12..].copy_from_slice(address.as_slice());
    word
}
