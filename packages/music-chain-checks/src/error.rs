//! Error types for the checks.

use std::fmt;

/// Check error type.
#[derive(Debug)]
pub enum Error {
    /// A required configuration value is absent.
    MissingConfig(&'static str),
    /// A configuration value is present but unusable.
    Config(String),
    /// Transport failure or JSON-RPC error object.
    Rpc(String),
    /// Malformed RPC payload or ABI return data.
    InvalidResponse(String),
    /// An RPC call did not answer in time.
    Timeout { method: &'static str, secs: u64 },
}

impl Error {
    /// Configuration problems, as opposed to chain query faults.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::MissingConfig(_) | Error::Config(_))
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingConfig(name) => write!(f, "config error: {name} is not set"),
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Rpc(msg) => write!(f, "rpc error: {msg}"),
            Error::InvalidResponse(msg) => write!(f, "invalid rpc response: {msg}"),
            Error::Timeout { method, secs } => {
                write!(f, "rpc error: {method} timed out after {secs}s")
            }
        }
    }
}

impl std::error::Error for Error {}
