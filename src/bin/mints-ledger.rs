use std::{fs::File, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mints_ledger::bin_utils::Service;
use tracing_subscriber::EnvFilter;

/// Replays mints contract events from a CSV file and prints holder balances.
#[derive(Parser, Debug)]
#[command(name = "mints-ledger", version)]
struct Cli {
    /// CSV file with columns `type,contract,from,to,id,value,price`.
    events: PathBuf,

    /// Also write mint tokens as CSV to this path.
    #[arg(long, value_name = "PATH")]
    tokens: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn", env = "MINTS_LEDGER_LOG")]
    log_level: String,

    /// Exit with an error when any balance went negative.
    #[arg(long)]
    deny_negative: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let file = File::open(&cli.events)
        .with_context(|| format!("Failed to open `{}`", cli.events.display()))?;
    let mut tokens_file = cli
        .tokens
        .as_ref()
        .map(|path| {
            File::create(path).with_context(|| format!("Failed to create `{}`", path.display()))
        })
        .transpose()?;

    let service = Service {
        input: file,
        balances: &mut std::io::stdout(),
        tokens: tokens_file.as_mut().map(|file| file as &mut dyn Write),
    };
    let stats = service.run()?;

    if cli.deny_negative && stats.negative_balances > 0 {
        anyhow::bail!(
            "{} transfer(s) left a holder with a negative balance",
            stats.negative_balances
        );
    }
    Ok(())
}
