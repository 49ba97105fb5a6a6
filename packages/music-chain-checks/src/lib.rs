//! # Music Chain Checks
//!
//! Read-only checks run around deployment of the music platform contract.
//!
//! ## Quick Start
//! ```bash
//! cargo run --bin check-balance
//! CONTRACT_ADDRESS=0x... cargo run --bin check-owner
//! ```
//!
//! ## Checks
//! - `check-balance` - Is the signer funded for the estimated deployment cost?
//! - `check-owner` - Is the signer the recorded owner of the deployed contract?

pub mod balance;
pub mod chain;
pub mod cli;
pub mod config;
pub mod contract;
mod error;
pub mod owner;
pub mod rpc;

pub use balance::{check_balance, BalancePolicy, BalanceReport, Funding};
pub use chain::ChainReader;
pub use config::Config;
pub use contract::{Ownable, OwnableContract};
pub use error::Error;
pub use owner::{verify_owner, OwnerReport};
pub use rpc::RpcClient;
