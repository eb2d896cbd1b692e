//! Hashledger CLI — command-line session for the in-memory proof-of-work ledger.
//!
//! The chain lives only as long as the process: nothing is written to disk.

mod render;
mod shell;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hashledger_chain::{Chain, ChainConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::shell::Session;

/// Creator id the original ledger form stamped on every new block.
const DEFAULT_CREATOR_ID: u64 = 42;

/// Participants cycled through when the demo generates extra transactions.
const DEMO_PARTIES: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

#[derive(Parser)]
#[command(name = "hashledger")]
#[command(about = "Hashledger CLI — in-memory hash-linked ledger with proof-of-work")]
#[command(version)]
struct Cli {
    /// JSON file with chain settings (difficulty, genesis record, genesis creator id)
    #[arg(long, global = true, env = "HASHLEDGER_CONFIG")]
    config: Option<PathBuf>,

    /// Leading zero hex digits required of each new block [default: 4]
    #[arg(long, global = true, env = "HASHLEDGER_DIFFICULTY")]
    difficulty: Option<u32>,

    /// Creator id stamped on blocks added in this session
    #[arg(long, global = true, env = "HASHLEDGER_CREATOR_ID", default_value_t = DEFAULT_CREATOR_ID)]
    creator_id: u64,

    /// Print ledgers, blocks and summaries as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a chain, mine sample transactions, print the ledger and validate it
    Demo {
        /// Number of transactions to mine after genesis
        #[arg(long, default_value_t = 1)]
        transactions: usize,
    },
    /// Start an interactive session holding one chain until `quit`
    Shell,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.difficulty)?;
    let chain = Chain::with_config(&config)?;

    match cli.command {
        Commands::Demo { transactions } => cmd_demo(chain, cli.creator_id, transactions, cli.json),
        Commands::Shell => cmd_shell(chain, cli.creator_id, cli.json),
    }
}

/// Build chain settings from an optional JSON file, then apply flag overrides.
fn load_config(path: Option<&Path>, difficulty: Option<u32>) -> Result<ChainConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => ChainConfig::default(),
    };
    if let Some(difficulty) = difficulty {
        config.difficulty = difficulty;
    }
    Ok(config)
}

fn cmd_demo(mut chain: Chain, creator_id: u64, transactions: usize, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();

    for i in 0..transactions {
        if i == 0 {
            chain.add_block("Alice", "Bob", 10.0, creator_id)?;
            continue;
        }
        let sender = DEMO_PARTIES[i % DEMO_PARTIES.len()];
        let receiver = DEMO_PARTIES[(i + 1) % DEMO_PARTIES.len()];
        chain.add_block(sender, receiver, i as f64 * 2.5, creator_id)?;
    }

    render::ledger(&chain, json, &mut out)?;
    if json {
        render::summary(&chain.summary(), json, &mut out)?;
    } else {
        writeln!(out, "\nChain valid: {}", chain.is_valid())?;
    }
    Ok(())
}

fn cmd_shell(chain: Chain, creator_id: u64, json: bool) -> Result<()> {
    let mut session = Session::new(chain, creator_id, json);
    let mut out = io::stdout().lock();
    session.run(io::stdin().lock(), &mut out)?;
    info!(blocks = session.chain().len(), "session ended");
    Ok(())
}
