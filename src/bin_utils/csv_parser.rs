use std::{io::Read, str::FromStr};

use csv::{Position, StringRecord, StringRecordsIntoIter, Trim};
use num_bigint::{BigUint, ParseBigIntError};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    event::{LoggedEvent, MintEvent},
    primitives::{Address, AddressError},
};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    TokenCreated,
    MintableTokenSet,
    TransferSingle,
    TransferBatch,
}

/// One CSV line. Batch `id` and `value` columns hold space separated lists.
#[derive(Debug, Deserialize)]
pub struct EventRow {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub contract: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Column `{column}` is required for {kind:?}")]
    MissingColumn {
        kind: EventKind,
        column: &'static str,
    },
    #[error("Column `{column}` holds an invalid address")]
    InvalidAddress {
        column: &'static str,
        #[source]
        source: AddressError,
    },
    #[error("Column `{column}` holds an invalid number `{value}`")]
    InvalidNumber {
        column: &'static str,
        value: String,
        #[source]
        source: ParseBigIntError,
    },
}

impl EventRow {
    pub fn into_event(self, position: u64) -> Result<LoggedEvent, ParseError> {
        let kind = self.kind;
        let contract = parse_address("contract", &self.contract)?;
        let event = match kind {
            EventKind::TokenCreated => MintEvent::TokenCreated {
                token_id: parse_number("id", required(kind, "id", &self.id)?)?,
                price_per_token: parse_number("price", required(kind, "price", &self.price)?)?,
            },
            EventKind::MintableTokenSet => MintEvent::MintableTokenSet {
                token_id: parse_number("id", required(kind, "id", &self.id)?)?,
            },
            EventKind::TransferSingle => MintEvent::TransferSingle {
                from: parse_address("from", required(kind, "from", &self.from)?)?,
                to: parse_address("to", required(kind, "to", &self.to)?)?,
                id: parse_number("id", required(kind, "id", &self.id)?)?,
                value: parse_number("value", required(kind, "value", &self.value)?)?,
            },
            EventKind::TransferBatch => MintEvent::TransferBatch {
                from: parse_address("from", required(kind, "from", &self.from)?)?,
                to: parse_address("to", required(kind, "to", &self.to)?)?,
                ids: parse_numbers("id", self.id.as_deref().unwrap_or_default())?,
                values: parse_numbers("value", self.value.as_deref().unwrap_or_default())?,
            },
        };
        Ok(LoggedEvent {
            contract,
            position,
            event,
        })
    }
}

fn required<'a>(
    kind: EventKind,
    column: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, ParseError> {
    value
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(ParseError::MissingColumn { kind, column })
}

fn parse_address(column: &'static str, value: &str) -> Result<Address, ParseError> {
    value
        .parse()
        .map_err(|source| ParseError::InvalidAddress { column, source })
}

fn parse_number(column: &'static str, value: &str) -> Result<BigUint, ParseError> {
    BigUint::from_str(value).map_err(|source| ParseError::InvalidNumber {
        column,
        value: value.to_string(),
        source,
    })
}

fn parse_numbers(column: &'static str, value: &str) -> Result<Vec<BigUint>, ParseError> {
    value
        .split_whitespace()
        .map(|item| parse_number(column, item))
        .collect()
}

/// Parses mints contract events from CSV, yielding the line each one came from.
pub struct CsvEventParser<R> {
    headers: StringRecord,
    iter: StringRecordsIntoIter<R>,
}

impl<R> CsvEventParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Result<Self, ParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);
        let headers = reader.headers()?.clone();

        Ok(Self {
            headers,
            iter: reader.into_records(),
        })
    }
}

impl<R> Iterator for CsvEventParser<R>
where
    R: Read,
{
    type Item = (u64, Result<LoggedEvent, ParseError>);

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.iter.next()? {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map_or(0, Position::line);
                return Some((line, Err(err.into())));
            }
        };
        let line = record.position().map_or(0, Position::line);
        let event = record
            .deserialize::<EventRow>(Some(&self.headers))
            .map_err(ParseError::from)
            .and_then(|row| row.into_event(line));
        Some((line, event))
    }
}

#[cfg(test)]
mod tests {
    use crate::primitives::{Amount, TokenId};

    use super::*;

    const HEADER: &str = "type,contract,from,to,id,value,price\n";
    const CONTRACT: &str = "0x00000000000000000000000000000000000000c0";

    fn parse(rows: &str) -> Vec<Result<LoggedEvent, ParseError>> {
        let input = format!("{HEADER}{rows}");
        CsvEventParser::new(input.as_bytes())
            .unwrap()
            .map(|(_, event)| event)
            .collect()
    }

    #[test]
    fn parse_every_event_kind() {
        let rows = format!(
            "token_created,{CONTRACT},,,1,,1000\n\
             mintable_token_set,{CONTRACT},,,1,,\n\
             transfer_single,{CONTRACT},0x0000000000000000000000000000000000000000,0x00000000000000000000000000000000000000a1,1,5,\n\
             transfer_batch,{CONTRACT},0x00000000000000000000000000000000000000a1,0x00000000000000000000000000000000000000b0,1 2,3 4,\n"
        );
        let events: Vec<_> = parse(&rows).into_iter().map(Result::unwrap).collect();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0].event,
            MintEvent::TokenCreated {
                token_id: TokenId::from(1u32),
                price_per_token: Amount::from(1000u32),
            }
        );
        assert_eq!(
            events[1].event,
            MintEvent::MintableTokenSet {
                token_id: TokenId::from(1u32)
            }
        );
        assert!(matches!(
            &events[2].event,
            MintEvent::TransferSingle { from, .. } if from.is_zero()
        ));
        let MintEvent::TransferBatch { ids, values, .. } = &events[3].event else {
            panic!("expected a batch transfer");
        };
        assert_eq!(ids, &vec![TokenId::from(1u32), TokenId::from(2u32)]);
        assert_eq!(values, &vec![Amount::from(3u32), Amount::from(4u32)]);
        assert!(events.iter().all(|e| e.contract.to_string() == CONTRACT));
    }

    #[test]
    fn report_line_numbers() {
        let rows = format!("token_created,{CONTRACT},,,1,,1\ntoken_created,{CONTRACT},,,2,,1\n");
        let input = format!("{HEADER}{rows}");
        let lines: Vec<_> = CsvEventParser::new(input.as_bytes())
            .unwrap()
            .map(|(line, _)| line)
            .collect();
        assert_eq!(lines, vec![2, 3]);
    }

    #[test]
    fn values_above_u128_are_accepted() {
        let huge = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let rows = format!("token_created,{CONTRACT},,,{huge},,1\n");
        let event = parse(&rows).pop().unwrap().unwrap();
        let MintEvent::TokenCreated { token_id, .. } = event.event else {
            panic!("expected token creation");
        };
        assert_eq!(token_id.to_string(), huge);
    }

    #[test]
    fn reject_missing_and_invalid_columns() {
        let rows = format!(
            "mintable_token_set,{CONTRACT},,,,,\n\
             transfer_single,{CONTRACT},0x01,0x00000000000000000000000000000000000000b0,1,1,\n\
             transfer_single,{CONTRACT},{CONTRACT},{CONTRACT},1,-1,\n"
        );
        let results = parse(&rows);
        assert!(matches!(
            &results[0],
            Err(ParseError::MissingColumn {
                kind: EventKind::MintableTokenSet,
                column: "id"
            })
        ));
        assert!(matches!(
            &results[1],
            Err(ParseError::InvalidAddress { column: "from", .. })
        ));
        assert!(matches!(
            &results[2],
            Err(ParseError::InvalidNumber { column: "value", .. })
        ));
    }

    #[test]
    fn unknown_event_type_is_a_csv_error() {
        let rows = format!("approval,{CONTRACT},,,1,,\n");
        assert!(matches!(parse(&rows)[0], Err(ParseError::Csv(_))));
    }
}
