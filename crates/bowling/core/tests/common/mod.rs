//! Shared helpers for integration tests.
#![allow(dead_code)]

use bowling_core::{Player, PlayerId, ScoreCard, TakeTurn, Turn};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize structured logging for tests.
///
/// Idempotent: later calls are no-ops. The filter comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `"warn"`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// A card with a single registered player.
pub fn card_for(name: &str) -> (ScoreCard, PlayerId) {
    init_logging();
    let mut card = ScoreCard::new();
    let id = card
        .add_participant(Player::named(name).expect("valid player name"))
        .expect("first registration succeeds");
    (card, id)
}

/// Rolls every pin count in order, panicking on the first rejected turn.
pub fn roll_all(card: &mut ScoreCard, player: PlayerId, rolls: &[i32]) {
    for &pins in rolls {
        let turn = Turn::new(pins).expect("pin count in range");
        card.take_turn(TakeTurn::new(player, turn)).expect("turn accepted");
    }
}
