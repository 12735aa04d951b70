use std::collections::BTreeMap;

use crate::entity::{EntityKind, MintAccountBalance, MintToken, Record};

use super::{EntityStore, StoreError};

/// Ordered in-memory store, so listings come out sorted by key.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    records: BTreeMap<(EntityKind, String), Record>,
    write_count: usize,
}

impl InMemoryEntityStore {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of upserts served so far, including overwrites.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Ordered by key string, so token `10` comes before token `2`.
    pub fn mint_tokens(&self) -> impl Iterator<Item = &MintToken> {
        self.records.values().filter_map(|record| match record {
            Record::MintToken(token) => Some(token),
            Record::MintAccountBalance(_) => None,
        })
    }

    pub fn balances(&self) -> impl Iterator<Item = &MintAccountBalance> {
        self.records.values().filter_map(|record| match record {
            Record::MintAccountBalance(balance) => Some(balance),
            Record::MintToken(_) => None,
        })
    }
}

impl EntityStore for InMemoryEntityStore {
    fn load(&self, kind: EntityKind, key: &str) -> Result<Option<Record>, StoreError> {
        Ok(self.records.get(&(kind, key.to_string())).cloned())
    }

    fn upsert(&mut self, record: Record) -> Result<(), StoreError> {
        self.records.insert((record.kind(), record.key()), record);
        self.write_count += 1;
        Ok(())
    }
}
