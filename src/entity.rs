use num_bigint::BigInt;

use crate::primitives::{Address, Amount, TokenId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    MintToken,
    MintAccountBalance,
}

/// One mintable token denomination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintToken {
    pub token_id: TokenId,
    pub price_per_token: Amount,
    pub is_mintable: bool,
}

impl MintToken {
    pub fn key(token_id: &TokenId) -> String {
        token_id.to_string()
    }
}

/// Balance of one holder for one token id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintAccountBalance {
    pub account: Address,
    /// Key of the [`MintToken`]. Not checked for existence.
    pub mint_token: String,
    /// May go below zero when a transfer is seen before the holder was credited.
    pub balance: BigInt,
}

impl MintAccountBalance {
    pub fn key(holder: &Address, token_id: &TokenId) -> String {
        format!("{holder}-{token_id}")
    }

    /// Zero balance record for a holder seen for the first time.
    pub fn empty(holder: Address, token_id: &TokenId) -> Self {
        Self {
            account: holder,
            mint_token: MintToken::key(token_id),
            balance: BigInt::default(),
        }
    }
}

/// Record as stored by an [`EntityStore`](crate::store::EntityStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    MintToken(MintToken),
    MintAccountBalance(MintAccountBalance),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::MintToken(_) => EntityKind::MintToken,
            Record::MintAccountBalance(_) => EntityKind::MintAccountBalance,
        }
    }

    pub fn key(&self) -> String {
        match self {
            Record::MintToken(token) => token.entity_key(),
            Record::MintAccountBalance(balance) => balance.entity_key(),
        }
    }
}

/// Typed view over a [`Record`] variant.
pub trait Entity: Sized {
    const KIND: EntityKind;

    fn entity_key(&self) -> String;

    fn into_record(self) -> Record;

    /// Returns the record back when it holds a different kind.
    fn from_record(record: Record) -> Result<Self, Record>;
}

impl Entity for MintToken {
    const KIND: EntityKind = EntityKind::MintToken;

    fn entity_key(&self) -> String {
        Self::key(&self.token_id)
    }

    fn into_record(self) -> Record {
        Record::MintToken(self)
    }

    fn from_record(record: Record) -> Result<Self, Record> {
        match record {
            Record::MintToken(token) => Ok(token),
            other => Err(other),
        }
    }
}

impl Entity for MintAccountBalance {
    const KIND: EntityKind = EntityKind::MintAccountBalance;

    fn entity_key(&self) -> String {
        format!("{}-{}", self.account, self.mint_token)
    }

    fn into_record(self) -> Record {
        Record::MintAccountBalance(self)
    }

    fn from_record(record: Record) -> Result<Self, Record> {
        match record {
            Record::MintAccountBalance(balance) => Ok(balance),
            other => Err(other),
        }
    }
}
