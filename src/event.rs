use crate::primitives::{Address, Amount, TokenId};

/// Events emitted by the mints contract, in the order they were confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintEvent {
    TokenCreated {
        token_id: TokenId,
        price_per_token: Amount,
    },
    MintableTokenSet {
        token_id: TokenId,
    },
    TransferSingle {
        from: Address,
        to: Address,
        id: TokenId,
        value: Amount,
    },
    /// `ids` and `values` are parallel and must have the same length.
    TransferBatch {
        from: Address,
        to: Address,
        ids: Vec<TokenId>,
        values: Vec<Amount>,
    },
}

impl MintEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MintEvent::TokenCreated { .. } => "TokenCreated",
            MintEvent::MintableTokenSet { .. } => "MintableTokenSet",
            MintEvent::TransferSingle { .. } => "TransferSingle",
            MintEvent::TransferBatch { .. } => "TransferBatch",
        }
    }
}

/// Event together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedEvent {
    /// Address of the emitting contract.
    pub contract: Address,
    /// Position in the source feed, used for diagnostics only.
    pub position: u64,
    pub event: MintEvent,
}
