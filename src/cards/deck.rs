//! Deck construction and dealing.

use super::card::{Card, Rank, Suit};
use super::hand::Hand;
use crate::core::rng::{shuffle, RandomSource};

/// Cards in a full deck: 52 suited cards plus the joker.
pub const DECK_SIZE: usize = 53;

/// Build the unshuffled deck: every suit with ranks 1-13, then one joker.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::all() {
            deck.push(Card::suited(suit, rank));
        }
    }
    deck.push(Card::Joker);
    deck
}

/// Build a deck and shuffle it with `rng`.
pub fn shuffled_deck<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = create_deck();
    shuffle(&mut deck, rng);
    deck
}

/// Deal the whole deck round-robin, one card at a time.
///
/// Cards come off the end of the deck, so the last card goes to the first
/// hand. Hands receive cards in seat order until the deck is exhausted.
pub fn deal(mut deck: Vec<Card>, hands: &mut [Hand]) {
    if hands.is_empty() {
        return;
    }
    let mut seat = 0;
    while let Some(card) = deck.pop() {
        hands[seat % hands.len()].append(card);
        seat += 1;
    }
}
