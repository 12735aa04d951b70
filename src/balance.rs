use num_bigint::{BigInt, Sign};

use crate::{
    entity::MintAccountBalance,
    primitives::{Address, Amount, TokenId},
    store::{EntityStore, EntityStoreExt, StoreError},
};

/// What a single balance mutation did to the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceUpdate {
    /// Holder is the null address, nothing was touched.
    Skipped,
    Applied { balance: BigInt, created: bool },
}

impl BalanceUpdate {
    pub fn is_negative(&self) -> bool {
        matches!(self, BalanceUpdate::Applied { balance, .. } if balance.sign() == Sign::Minus)
    }
}

/// Credits `amount` of `token_id` to `holder`.
pub fn increment<S: EntityStore>(
    store: &mut S,
    holder: &Address,
    amount: &Amount,
    token_id: &TokenId,
) -> Result<BalanceUpdate, StoreError> {
    apply(store, holder, token_id, |balance| {
        *balance += BigInt::from(amount.clone())
    })
}

/// Debits `amount` of `token_id` from `holder`. The result is allowed to go negative.
pub fn decrement<S: EntityStore>(
    store: &mut S,
    holder: &Address,
    amount: &Amount,
    token_id: &TokenId,
) -> Result<BalanceUpdate, StoreError> {
    apply(store, holder, token_id, |balance| {
        *balance -= BigInt::from(amount.clone())
    })
}

fn apply<S: EntityStore>(
    store: &mut S,
    holder: &Address,
    token_id: &TokenId,
    change: impl FnOnce(&mut BigInt),
) -> Result<BalanceUpdate, StoreError> {
    if holder.is_zero() {
        return Ok(BalanceUpdate::Skipped);
    }
    let key = MintAccountBalance::key(holder, token_id);
    let mut loaded = store.load_or_create(&key, || MintAccountBalance::empty(*holder, token_id))?;
    change(&mut loaded.entity.balance);
    let balance = loaded.entity.balance.clone();
    store.put(loaded.entity)?;
    Ok(BalanceUpdate::Applied {
        balance,
        created: loaded.created,
    })
}
