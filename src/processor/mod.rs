use thiserror::Error;

use crate::{contract::ContractError, event::LoggedEvent, store::StoreError};

pub mod mints_processor;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Contract(#[from] ContractError),
    #[error("Batch transfer has {ids} ids but {values} values")]
    BatchLengthMismatch { ids: usize, values: usize },
}

/// Counters collected while applying events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessStats {
    pub events: u64,
    /// Transfer legs (single or batch entries) skipped because their value was zero.
    pub zero_value_transfers: u64,
    pub balances_created: u64,
    /// Decrements that left a holder below zero.
    pub negative_balances: u64,
    /// Mintability toggles aimed at a token that was never created.
    pub unknown_mintable_tokens: u64,
}

/// Applies events strictly in the order they are handed over.
pub trait EventProcessor {
    fn process_event(&mut self, event: &LoggedEvent) -> Result<(), ProcessError>;
}
