//! Text and JSON views of the chain.

use std::io::Write;

use anyhow::Result;
use hashledger_chain::{Block, BlockView, Chain, ChainSummary};

/// Characters of each hash shown in the ledger table.
const SHORT_HASH: usize = 16;

fn short(hash: &str) -> &str {
    hash.get(..SHORT_HASH).unwrap_or(hash)
}

/// Label shown in place of the genesis block's sentinel previous hash.
const GENESIS_LABEL: &str = "(genesis)";

/// Print every block, oldest first.
pub fn ledger(chain: &Chain, json: bool, out: &mut dyn Write) -> Result<()> {
    let rows: Vec<BlockView> = chain.blocks().iter().map(Block::view).collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>3}  {:<12} {:<12} {:>12}  {:>7}  {:<8}  {:>8}  {:<16}  {:<16}",
        "#", "sender", "receiver", "amount", "creator", "time", "nonce", "prev_hash", "hash"
    )?;
    for (index, (block, row)) in chain.blocks().iter().zip(&rows).enumerate() {
        let prev_hash = if block.is_genesis() {
            GENESIS_LABEL
        } else {
            short(&row.prev_hash)
        };
        writeln!(
            out,
            "{:>3}  {:<12} {:<12} {:>12.2}  {:>7}  {:<8}  {:>8}  {:<16}  {:<16}",
            index,
            row.sender,
            row.receiver,
            row.amount,
            row.creator_id,
            row.timestamp,
            row.nonce,
            prev_hash,
            short(&row.hash),
        )?;
    }
    Ok(())
}

/// Print a single block with full hashes.
pub fn block(index: usize, block: &Block, json: bool, out: &mut dyn Write) -> Result<()> {
    let view = block.view();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
        return Ok(());
    }

    writeln!(out, "Block {index}")?;
    writeln!(out, "  Sender:     {}", view.sender)?;
    writeln!(out, "  Receiver:   {}", view.receiver)?;
    writeln!(out, "  Amount:     {}", view.amount)?;
    writeln!(out, "  Creator id: {}", view.creator_id)?;
    writeln!(out, "  Timestamp:  {}", view.timestamp)?;
    writeln!(out, "  Nonce:      {}", view.nonce)?;
    writeln!(out, "  Prev hash:  {}", view.prev_hash)?;
    writeln!(out, "  Hash:       {}", view.hash)?;
    Ok(())
}

/// Print chain totals.
pub fn summary(summary: &ChainSummary, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
        return Ok(());
    }

    writeln!(out, "  Blocks:       {}", summary.blocks)?;
    writeln!(out, "  Difficulty:   {}", summary.difficulty)?;
    writeln!(out, "  Total amount: {}", summary.total_amount)?;
    writeln!(out, "  Tip hash:     {}", summary.tip_hash)?;
    writeln!(out, "  Valid:        {}", summary.valid)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashledger_chain::{ChainConfig, Hashable};

    fn chain() -> Chain {
        let config = ChainConfig {
            difficulty: 1,
            ..ChainConfig::default()
        };
        let mut chain = Chain::with_config(&config).expect("chain");
        chain.add_block("Alice", "Bob", 10.0, 42).expect("added");
        chain
    }

    #[test]
    fn test_ledger_table() {
        let chain = chain();
        let mut out = Vec::new();
        ledger(&chain, false, &mut out).expect("render");

        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Genesis"));
        assert!(lines[1].contains(GENESIS_LABEL));
        assert!(lines[2].contains("Alice"));
        assert!(!lines[2].contains(GENESIS_LABEL));
        assert!(lines[2].contains(&chain.blocks()[0].hash().to_hex()[..SHORT_HASH]));
        assert!(lines[2].contains(&chain.tip_hash().to_hex()[..SHORT_HASH]));
    }

    #[test]
    fn test_ledger_json() {
        let chain = chain();
        let mut out = Vec::new();
        ledger(&chain, true, &mut out).expect("render");

        let rows: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(rows.as_array().map(Vec::len), Some(2));
        assert_eq!(rows[1]["receiver"], "Bob");
        assert_eq!(rows[1]["prev_hash"], rows[0]["hash"]);
    }

    #[test]
    fn test_block_inspector_full_hash() {
        let chain = chain();
        let tip = chain.tip();
        let mut out = Vec::new();
        block(1, tip, false, &mut out).expect("render");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("Block 1"));
        assert!(text.contains(&tip.hash().to_hex()));
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(short("0"), "0");
        assert_eq!(short(&"a".repeat(64)).len(), SHORT_HASH);
    }
}
