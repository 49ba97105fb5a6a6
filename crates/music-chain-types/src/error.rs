/// Failure to parse a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    Empty,
    Negative,
    InvalidFormat(String),
    TooPrecise { max_decimals: u8 },
    Overflow,
    ExceedsLimit(&'static str),
}

impl std::fmt::Display for AmountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty amount"),
            Self::Negative => write!(f, "amount must not be negative"),
            Self::InvalidFormat(s) => write!(f, "invalid decimal amount: {s:?}"),
            Self::TooPrecise { max_decimals } => {
                write!(f, "amount has more than {max_decimals} fractional digits")
            }
            Self::Overflow => write!(f, "amount exceeds 256 bits"),
            Self::ExceedsLimit(what) => write!(f, "{what}"),
        }
    }
}

impl std::error::Error for AmountError {}

/// Failure to parse a 20-byte hex address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    InvalidLength(usize),
    InvalidHex(String),
}

impl std::fmt::Display for AddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "address must be 40 hex characters, got {len}")
            }
            Self::InvalidHex(msg) => write!(f, "invalid hex address: {msg}"),
        }
    }
}

impl std::error::Error for AddressError {}
