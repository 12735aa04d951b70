use num_traits::Zero;
use tracing::{debug, warn};

use crate::{
    balance::{self, BalanceUpdate},
    contract::MintContract,
    entity::MintToken,
    event::{LoggedEvent, MintEvent},
    primitives::{Address, Amount, TokenId},
    store::{EntityStore, EntityStoreExt},
};

use super::{EventProcessor, ProcessError, ProcessStats};

/// Maintains `MintToken` and `MintAccountBalance` records from mints contract events.
pub struct MintsProcessor<S, C> {
    store: S,
    contract: C,
    stats: ProcessStats,
}

impl<S, C> MintsProcessor<S, C>
where
    S: EntityStore,
    C: MintContract,
{
    pub fn new(store: S, contract: C) -> Self {
        Self {
            store,
            contract,
            stats: ProcessStats::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn contract_mut(&mut self) -> &mut C {
        &mut self.contract
    }

    pub fn stats(&self) -> &ProcessStats {
        &self.stats
    }

    pub fn into_parts(self) -> (S, C, ProcessStats) {
        (self.store, self.contract, self.stats)
    }

    /// Creation is authoritative: a repeated id overwrites the price and clears the flag.
    pub fn handle_token_created(
        &mut self,
        token_id: &TokenId,
        price_per_token: &Amount,
    ) -> Result<(), ProcessError> {
        self.store.put(MintToken {
            token_id: token_id.clone(),
            price_per_token: price_per_token.clone(),
            is_mintable: false,
        })?;
        Ok(())
    }

    pub fn handle_mintable_token_set(
        &mut self,
        contract: &Address,
        token_id: &TokenId,
    ) -> Result<(), ProcessError> {
        let active_id = self.contract.mintable_eth_token(contract)?;
        if let Some(mut active) = self.store.get::<MintToken>(&MintToken::key(&active_id))? {
            active.is_mintable = false;
            self.store.put(active)?;
        }

        let Some(mut next) = self.store.get::<MintToken>(&MintToken::key(token_id))? else {
            warn!(%token_id, "Mintable token was never created, leaving it untracked");
            self.stats.unknown_mintable_tokens += 1;
            return Ok(());
        };
        next.is_mintable = true;
        self.store.put(next)?;
        Ok(())
    }

    pub fn handle_transfer_single(
        &mut self,
        from: &Address,
        to: &Address,
        id: &TokenId,
        value: &Amount,
    ) -> Result<(), ProcessError> {
        self.transfer(from, to, id, value)
    }

    /// Rejects the whole event before touching the store when `ids` and `values` differ in length.
    pub fn handle_transfer_batch(
        &mut self,
        from: &Address,
        to: &Address,
        ids: &[TokenId],
        values: &[Amount],
    ) -> Result<(), ProcessError> {
        if ids.len() != values.len() {
            return Err(ProcessError::BatchLengthMismatch {
                ids: ids.len(),
                values: values.len(),
            });
        }
        for (id, value) in ids.iter().zip(values) {
            self.transfer(from, to, id, value)?;
        }
        Ok(())
    }

    // Receiver is credited before the sender is debited.
    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        id: &TokenId,
        value: &Amount,
    ) -> Result<(), ProcessError> {
        if value.is_zero() {
            self.stats.zero_value_transfers += 1;
            return Ok(());
        }
        let credit = balance::increment(&mut self.store, to, value, id)?;
        self.track(&credit);
        let debit = balance::decrement(&mut self.store, from, value, id)?;
        self.track(&debit);
        if debit.is_negative() {
            warn!(holder = %from, token_id = %id, %value, "Balance went negative");
            self.stats.negative_balances += 1;
        }
        Ok(())
    }

    fn track(&mut self, update: &BalanceUpdate) {
        if let BalanceUpdate::Applied { created: true, .. } = update {
            self.stats.balances_created += 1;
        }
    }
}

impl<S, C> EventProcessor for MintsProcessor<S, C>
where
    S: EntityStore,
    C: MintContract,
{
    fn process_event(&mut self, logged: &LoggedEvent) -> Result<(), ProcessError> {
        debug!(
            position = logged.position,
            contract = %logged.contract,
            event = logged.event.name(),
            "Processing event"
        );
        match &logged.event {
            MintEvent::TokenCreated {
                token_id,
                price_per_token,
            } => self.handle_token_created(token_id, price_per_token)?,
            MintEvent::MintableTokenSet { token_id } => {
                self.handle_mintable_token_set(&logged.contract, token_id)?
            }
            MintEvent::TransferSingle {
                from,
                to,
                id,
                value,
            } => self.handle_transfer_single(from, to, id, value)?,
            MintEvent::TransferBatch {
                from,
                to,
                ids,
                values,
            } => self.handle_transfer_batch(from, to, ids, values)?,
        }
        self.stats.events += 1;
        Ok(())
    }
}
