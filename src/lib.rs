/// Addresses and the big integer aliases used for token ids and amounts.
pub mod primitives;

/// Stored records: mint tokens and per holder balances, plus their keys.
pub mod entity;

/// Events emitted by the mints contract.
pub mod event;

/// Key-value entity store interface, plus "in memory" implementation.
pub mod store;

/// Read access to the emitting contract's state.
pub mod contract;

/// Credit and debit of holder balances, creating records on first touch.
pub mod balance;

/// Event processor interface and the mints implementation.
/// Events must be handed over one at a time, in the order they were confirmed;
/// nothing here reorders or deduplicates them.
pub mod processor;

/// Replay of a recorded CSV feed, used by the binary and integration tests.
pub mod bin_utils;
