use thiserror::Error;

use crate::primitives::{Address, TokenId};

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("No contract deployed at {0}")]
    UnknownContract(Address),
}

/// Read access to the emitting mints contract.
pub trait MintContract {
    /// Token id the contract currently mints against (`mintableEthToken()`).
    fn mintable_eth_token(&self, contract: &Address) -> Result<TokenId, ContractError>;
}
