//! Full rounds driven through the engine with virtual time.

use memory_match::core::{build_deck, Session, SimpleRng};
use memory_match::engine::GameEngine;
use memory_match::types::{GameAction, GameStatus, Level, Outcome, SYMBOLS};

/// Unshuffled deck: card `2i` pairs with `2i + 1`.
fn engine(level: Level) -> GameEngine {
    GameEngine::from_session(
        Session::new(level, build_deck(&SYMBOLS)),
        SimpleRng::new(99),
    )
}

fn find_all_pairs(e: &mut GameEngine) {
    for pair in 0..8u32 {
        e.click(pair * 2);
        e.click(pair * 2 + 1);
    }
}

#[test]
fn test_winning_round_reports_full_duration() {
    let mut e = engine(Level::Easy);
    find_all_pairs(&mut e);
    e.advance(30_000);

    let snap = e.snapshot();
    assert_eq!(snap.score, 8);
    assert_eq!(snap.status, GameStatus::Running);
    assert!(snap.cards.iter().all(|c| c.matched && c.symbol.is_some()));

    e.advance(90_000);
    let report = e.session().final_report().unwrap();
    assert_eq!(report.outcome, Outcome::Won);
    assert_eq!(report.elapsed_secs, 120);
    assert_eq!(report.message(), "Congratulations! You won in 120 seconds.");
    assert_eq!(e.snapshot().remaining_display(), "0:00");
}

#[test]
fn test_losing_round() {
    let mut e = engine(Level::Normal);
    e.click(0);
    e.click(1);
    e.click(2);
    e.click(4);
    e.advance(90_000);

    let snap = e.snapshot();
    assert_eq!(snap.status, GameStatus::Lost);
    assert_eq!(snap.score, 1);
    assert!(snap.input_locked);
    assert_eq!(
        snap.final_report.unwrap().message(),
        "Oops, you lose. You took too long!"
    );
    // The mismatched pair went back face down.
    assert!(!snap.cards[2].face_up);
    assert!(!snap.cards[4].face_up);
}

#[test]
fn test_clicks_ignored_after_round_ends() {
    let mut e = engine(Level::Hard);
    e.click(0);
    e.advance(45_000);
    assert_eq!(e.session().status(), GameStatus::Lost);

    let before = e.snapshot();
    assert!(!e.click(3));
    assert_eq!(e.snapshot(), before);
}

#[test]
fn test_clicks_ignored_while_mismatch_shown() {
    let mut e = engine(Level::Easy);
    e.click(0);
    e.click(2);
    assert!(!e.click(4));
    assert!(!e.snapshot().cards[4].face_up);

    e.advance(1_000);
    assert!(e.click(4));
    assert!(e.snapshot().cards[4].face_up);
}

#[test]
fn test_stale_hide_does_not_touch_new_round() {
    let mut e = engine(Level::Easy);
    e.click(0);
    e.click(2);
    e.restart();

    // Start the new round and reveal a card before the old delay would expire.
    let first = e.session().cards()[0].id;
    e.click(first);
    e.advance(1_000);
    assert_eq!(e.session().pending_first_card(), Some(first));
    assert!(e.session().card(first).unwrap().face_up);
}

#[test]
fn test_restart_via_action_reshuffles() {
    let mut e = GameEngine::seeded(Level::Easy, 5);
    let first_deck = e.session().cards().to_vec();
    e.apply_action(GameAction::Restart);
    assert_ne!(e.session().cards(), first_deck.as_slice());
    assert_eq!(e.session().generation(), 1);
}

#[test]
fn test_remaining_time_counts_down() {
    let mut e = engine(Level::Normal);
    assert_eq!(e.snapshot().remaining_display(), "1:30");
    e.click(0);
    e.advance(31_000);
    assert_eq!(e.snapshot().remaining_display(), "0:59");
}
