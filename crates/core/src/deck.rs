//! Deck construction.

use crate::rng::{shuffle, RandomSource};
use crate::types::{Card, CardId, Symbol};

/// Build an unshuffled deck: the symbol at index `i` yields cards `2i` and `2i + 1`.
///
/// Symbols are expected to be distinct. Symbols past the `CardId` range are
/// left out rather than given colliding ids.
pub fn build_deck(symbols: &[Symbol]) -> Vec<Card> {
    let mut deck = Vec::with_capacity(symbols.len() * 2);
    for (i, &symbol) in symbols.iter().enumerate() {
        let Some(id) = i
            .checked_mul(2)
            .and_then(|first| CardId::try_from(first).ok())
        else {
            break;
        };
        deck.push(Card::new(id, symbol));
        deck.push(Card::new(id + 1, symbol));
    }
    deck
}

/// Build a deck and shuffle it in place.
pub fn shuffled_deck<R: RandomSource + ?Sized>(symbols: &[Symbol], rng: &mut R) -> Vec<Card> {
    let mut deck = build_deck(symbols);
    shuffle(&mut deck, rng);
    deck
}

/// Check the pair invariant: unique ids, every symbol on exactly two cards.
pub fn is_well_formed(deck: &[Card]) -> bool {
    if deck.len() % 2 != 0 {
        return false;
    }

    for (i, card) in deck.iter().enumerate() {
        if deck[i + 1..].iter().any(|other| other.id == card.id) {
            return false;
        }
        if deck.iter().filter(|other| other.symbol == card.symbol).count() != 2 {
            return false;
        }
    }
    true
}
