//! Card system: cards, hands and the deck.
//!
//! ## Key Types
//!
//! - `Card`: a suited card or the joker
//! - `Rank`, `Suit`: the parts of a suited card
//! - `Hand`: ordered cards with pair removal
//!
//! `create_deck`, `shuffled_deck` and `deal` build and distribute the
//! 53-card deck.

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::{create_deck, deal, shuffled_deck, DECK_SIZE};
pub use hand::Hand;
