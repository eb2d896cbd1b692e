//! Integration tests for the hashledger chain — session-level scenarios.

use hashledger_chain::pow::{self, MAX_DIFFICULTY};
use hashledger_chain::{Block, Chain, ChainConfig, ChainError, Hashable, Record, GENESIS_PREV_HASH};

/// Genesis chain as the interactive session creates it, at a quick difficulty.
fn setup(difficulty: u32) -> Chain {
    let config = ChainConfig {
        difficulty,
        ..ChainConfig::default()
    };
    Chain::with_config(&config).expect("chain built")
}

fn assert_linked(chain: &Chain) {
    for pair in chain.blocks().windows(2) {
        assert_eq!(pair[1].prev_hash(), pair[0].hash().to_hex());
    }
}

// ---------------------------------------------------------------------------
// Test: Genesis-only chain
// ---------------------------------------------------------------------------

#[test]
fn test_genesis_chain_is_valid() {
    let chain = Chain::new(Record::new("Genesis", "None", 0.0), 0);

    assert_eq!(chain.len(), 1);
    let genesis = &chain.blocks()[0];
    assert_eq!(genesis.prev_hash(), GENESIS_PREV_HASH);
    assert_eq!(genesis.creator_id(), 0);
    assert_eq!(genesis.record().sender(), "Genesis");
    assert_eq!(genesis.record().receiver(), "None");
    assert_eq!(genesis.record().amount(), 0.0);
    assert!(chain.is_valid());
}

// ---------------------------------------------------------------------------
// Test: First transaction at difficulty 2
// ---------------------------------------------------------------------------

#[test]
fn test_first_transaction_mined_at_difficulty_two() {
    let mut chain = setup(2);

    let hash = chain
        .add_block("Alice", "Bob", 10.0, 42)
        .expect("block added")
        .hash();

    assert!(hash.to_hex().starts_with("00"));
    assert_eq!(chain.len(), 2);
    assert!(chain.is_valid());
}

// ---------------------------------------------------------------------------
// Test: Many transactions keep the chain linked
// ---------------------------------------------------------------------------

#[test]
fn test_growth_and_linkage() {
    let mut chain = setup(1);
    let n = 8;

    for i in 0..n {
        let before = chain.tip_hash();
        let block = chain
            .add_block(format!("sender-{i}"), format!("receiver-{i}"), i as f64 * 1.5, 42)
            .expect("block added");
        assert_eq!(block.prev_hash(), before.to_hex());
        assert_linked(&chain);
    }

    assert_eq!(chain.blocks().len(), n + 1);
    assert!(chain.is_valid());
    assert!(chain.is_valid());
}

// ---------------------------------------------------------------------------
// Test: Free-form records are accepted
// ---------------------------------------------------------------------------

#[test]
fn test_empty_and_negative_records_accepted() {
    let mut chain = setup(1);
    chain.add_block("", "", 0.0, 0).expect("empty names accepted");
    chain.add_block("Bob", "Alice", -3.0, 1).expect("negative amount accepted");

    assert_eq!(chain.len(), 3);
    assert!(chain.is_valid());
}

// ---------------------------------------------------------------------------
// Test: Difficulty changes between appends
// ---------------------------------------------------------------------------

#[test]
fn test_difficulty_changes_apply_to_next_block() {
    let mut chain = setup(1);
    chain.add_block("a", "b", 1.0, 42).expect("added");

    chain.set_difficulty(3).expect("difficulty set");
    let hash = chain.add_block("c", "d", 2.0, 42).expect("added").hash();
    assert!(pow::meets_difficulty(&hash, 3));

    chain.set_difficulty(0).expect("difficulty set");
    let block = chain.add_block("e", "f", 3.0, 42).expect("added");
    assert_eq!(block.nonce(), 0);

    assert!(chain.is_valid());
    assert!(matches!(
        chain.set_difficulty(MAX_DIFFICULTY + 1),
        Err(ChainError::DifficultyTooHigh { .. })
    ));
    assert_eq!(chain.difficulty(), 0);
}

// ---------------------------------------------------------------------------
// Test: Caller-built candidate with a stale link
// ---------------------------------------------------------------------------

#[test]
fn test_stale_candidate_breaks_validity() {
    let mut chain = setup(1);
    let stale_link = chain.tip_hash().to_hex();
    chain.add_block("Alice", "Bob", 10.0, 42).expect("added");

    let candidate = Block::new(Record::new("Carol", "Dave", 1.0), 42, stale_link);
    chain.add_candidate(candidate).expect("candidate appended");

    assert_eq!(chain.len(), 3);
    assert!(!chain.is_valid());
    match chain.validate() {
        Err(ChainError::BrokenLink { index, .. }) => assert_eq!(index, 2),
        other => panic!("expected broken link, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: Block views expose everything a ledger table needs
// ---------------------------------------------------------------------------

#[test]
fn test_block_views_for_display() {
    let mut chain = setup(1);
    chain.add_block("Alice", "Bob", 10.0, 42).expect("added");

    let rows: Vec<_> = chain.blocks().iter().map(Block::view).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].sender, "Alice");
    assert_eq!(rows[1].receiver, "Bob");
    assert_eq!(rows[1].amount, 10.0);
    assert_eq!(rows[1].creator_id, 42);
    assert_eq!(rows[1].prev_hash, rows[0].hash);
    assert_eq!(rows[1].hash, chain.tip_hash().to_hex());

    let json = serde_json::to_string(&rows).expect("serialize");
    assert!(json.contains("\"sender\":\"Alice\""));

    let summary = chain.summary();
    assert_eq!(summary.blocks, 2);
    assert_eq!(summary.total_amount, 10.0);
    assert!(summary.valid);
}
