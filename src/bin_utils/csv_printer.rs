use std::io::Write;

use csv::Writer;
use serde::Serialize;

use crate::entity::{MintAccountBalance, MintToken};

#[derive(Debug, Serialize)]
pub struct BalanceRow {
    pub account: String,
    pub token_id: String,
    pub balance: String,
}

impl From<&MintAccountBalance> for BalanceRow {
    fn from(record: &MintAccountBalance) -> Self {
        Self {
            account: record.account.to_string(),
            token_id: record.mint_token.clone(),
            balance: record.balance.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenRow {
    pub token_id: String,
    pub price_per_token: String,
    pub is_mintable: bool,
}

impl From<&MintToken> for TokenRow {
    fn from(token: &MintToken) -> Self {
        Self {
            token_id: token.token_id.to_string(),
            price_per_token: token.price_per_token.to_string(),
            is_mintable: token.is_mintable,
        }
    }
}

pub fn print_rows<W, T>(output: &mut W, rows: impl Iterator<Item = T>) -> anyhow::Result<()>
where
    W: Write + ?Sized,
    T: Serialize,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
