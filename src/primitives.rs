use std::{fmt, str::FromStr};

use num_bigint::BigUint;
use thiserror::Error;

/// Token identifier, uint256 on chain.
pub type TokenId = BigUint;

/// Transfer quantity or price, uint256 on chain.
pub type Amount = BigUint;

#[derive(Debug, Error, PartialEq)]
pub enum AddressError {
    #[error("Address must start with 0x: `{0}`")]
    MissingPrefix(String),
    #[error("Address must be 20 bytes, got {0}")]
    InvalidLength(usize),
    #[error("Address is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// 20-byte account or contract address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// Null/burn sentinel. Transfers from it are mints, transfers to it are burns.
    pub const ZERO: Address = Address([0; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) else {
            return Err(AddressError::MissingPrefix(s.to_string()));
        };
        let bytes = hex::decode(digits)?;
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|bytes: Vec<u8>| AddressError::InvalidLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}
