//! Replays a recorded event feed through [`MintsProcessor`] and prints the
//! resulting ledger. Kept in the library so integration tests can drive it.

use std::io::{Read, Write};

use crate::{
    event::MintEvent,
    processor::{EventProcessor, ProcessStats, mints_processor::MintsProcessor},
    store::in_memory_store::InMemoryEntityStore,
};
use anyhow::{Context, Result};
use csv_parser::CsvEventParser;
use csv_printer::{BalanceRow, TokenRow, print_rows};
use replay_contract::ReplayMintContract;
use tracing::info;
pub mod csv_parser;
pub mod csv_printer;
pub mod replay_contract;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub balances: &'w mut W,
    pub tokens: Option<&'w mut dyn Write>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    /// Stops at the first event that cannot be parsed or applied, since
    /// skipping it would leave balances inconsistent.
    pub fn run(self) -> Result<ProcessStats> {
        let parser = CsvEventParser::new(self.input).context("Failed to read CSV header")?;

        let mut processor =
            MintsProcessor::new(InMemoryEntityStore::default(), ReplayMintContract::default());

        for (line, event) in parser {
            let event = event.with_context(|| format!("Invalid event at line {line}"))?;
            processor
                .process_event(&event)
                .with_context(|| format!("Failed to apply event at line {line}"))?;
            if let MintEvent::MintableTokenSet { token_id } = &event.event {
                processor
                    .contract_mut()
                    .set_mintable_eth_token(event.contract, token_id.clone());
            }
        }

        let (store, _, stats) = processor.into_parts();
        info!(
            events = stats.events,
            records = store.len(),
            negative_balances = stats.negative_balances,
            "Replay finished"
        );

        print_rows(self.balances, store.balances().map(BalanceRow::from))?;
        if let Some(tokens) = self.tokens {
            print_rows(tokens, store.mint_tokens().map(TokenRow::from))?;
        }
        Ok(stats)
    }
}
