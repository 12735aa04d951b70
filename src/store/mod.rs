use thiserror::Error;

use crate::entity::{Entity, EntityKind, Record};

pub mod in_memory_store;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Expected {expected:?} under key `{key}`, found {found:?}")]
    KindMismatch {
        key: String,
        expected: EntityKind,
        found: EntityKind,
    },
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Key-value persistence for ledger entities.
///
/// Every handler reads through [`EntityStore::load`] and writes through
/// [`EntityStore::upsert`]; nothing is cached between events.
pub trait EntityStore {
    fn load(&self, kind: EntityKind, key: &str) -> Result<Option<Record>, StoreError>;

    fn upsert(&mut self, record: Record) -> Result<(), StoreError>;
}

/// Result of [`EntityStoreExt::load_or_create`].
#[derive(Debug)]
pub struct Loaded<E> {
    pub entity: E,
    /// `true` when nothing was stored under the key yet.
    pub created: bool,
}

/// Typed helpers on top of [`EntityStore`].
pub trait EntityStoreExt: EntityStore {
    fn get<E: Entity>(&self, key: &str) -> Result<Option<E>, StoreError> {
        let Some(record) = self.load(E::KIND, key)? else {
            return Ok(None);
        };
        E::from_record(record)
            .map(Some)
            .map_err(|found| StoreError::KindMismatch {
                key: key.to_string(),
                expected: E::KIND,
                found: found.kind(),
            })
    }

    /// Loads the entity or builds a fresh one with `init`. Nothing is persisted.
    fn load_or_create<E: Entity>(
        &self,
        key: &str,
        init: impl FnOnce() -> E,
    ) -> Result<Loaded<E>, StoreError> {
        Ok(match self.get(key)? {
            Some(entity) => Loaded {
                entity,
                created: false,
            },
            None => Loaded {
                entity: init(),
                created: true,
            },
        })
    }

    fn put<E: Entity>(&mut self, entity: E) -> Result<(), StoreError> {
        self.upsert(entity.into_record())
    }
}

impl<S: EntityStore + ?Sized> EntityStoreExt for S {}
