//! Interactive session: one chain, driven line by line.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use hashledger_chain::Chain;

use crate::render;

const HELP: &str = "\
commands:
  add <sender> <receiver> <amount>   mine and append a transaction
  difficulty <d>                     set leading zero digits for new blocks
  ledger                             show every block
  inspect <index>                    show one block
  validate                           check every hash link
  summary                            show chain totals
  help                               show this text
  quit                               end the session";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        sender: String,
        receiver: String,
        amount: f64,
    },
    Difficulty(u32),
    Ledger,
    Inspect(usize),
    Validate,
    Summary,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("add", [sender, receiver, amount]) => Command::Add {
                sender: sender.to_string(),
                receiver: receiver.to_string(),
                amount: amount
                    .parse()
                    .with_context(|| format!("invalid amount: {amount}"))?,
            },
            ("add", _) => bail!("usage: add <sender> <receiver> <amount>"),
            ("difficulty", [d]) => Command::Difficulty(
                d.parse()
                    .with_context(|| format!("invalid difficulty: {d}"))?,
            ),
            ("difficulty", _) => bail!("usage: difficulty <d>"),
            ("inspect", [index]) => Command::Inspect(
                index
                    .parse()
                    .with_context(|| format!("invalid block index: {index}"))?,
            ),
            ("inspect", _) => bail!("usage: inspect <index>"),
            ("ledger", []) => Command::Ledger,
            ("validate", []) => Command::Validate,
            ("summary", []) => Command::Summary,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (other, _) => bail!("unknown command: {other} (try `help`)"),
        };
        Ok(Some(command))
    }
}

/// Session state owned for the lifetime of one shell.
pub struct Session {
    chain: Chain,
    creator_id: u64,
    json: bool,
}

impl Session {
    pub fn new(chain: Chain, creator_id: u64, json: bool) -> Self {
        Self {
            chain,
            creator_id,
            json,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Run one command. Returns `false` once the session should end.
    pub fn execute(&mut self, command: Command, out: &mut dyn Write) -> Result<bool> {
        match command {
            Command::Add {
                sender,
                receiver,
                amount,
            } => {
                let hash = self
                    .chain
                    .add_block(sender, receiver, amount, self.creator_id)?
                    .block_hash();
                writeln!(out, "block {} mined: {hash}", self.chain.len() - 1)?;
            }
            Command::Difficulty(d) => {
                self.chain.set_difficulty(d)?;
                writeln!(out, "difficulty set to {d}")?;
            }
            Command::Ledger => render::ledger(&self.chain, self.json, out)?,
            Command::Inspect(index) => {
                let block = self.chain.get_block(index)?;
                render::block(index, block, self.json, out)?;
            }
            Command::Validate => writeln!(out, "{}", self.chain.is_valid())?,
            Command::Summary => render::summary(&self.chain.summary(), self.json, out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Read commands until `quit` or end of input. Command errors are
    /// reported and the session carries on.
    pub fn run(&mut self, input: impl BufRead, out: &mut dyn Write) -> Result<()> {
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let keep_going = match Command::parse(&line) {
                Ok(Some(command)) => match self.execute(command, out) {
                    Ok(keep_going) => keep_going,
                    Err(err) => {
                        writeln!(out, "error: {err:#}")?;
                        true
                    }
                },
                Ok(None) => true,
                Err(err) => {
                    writeln!(out, "error: {err:#}")?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}
