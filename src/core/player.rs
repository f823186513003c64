//! Player identification, control mode and per-player hands.
//!
//! ## PlayerId
//!
//! Seat index assigned at game start. Ids stay stable while the active
//! roster shrinks, so events and outcomes can refer to eliminated players.
//!
//! ## Player
//!
//! Name, `Controller` and the player's `Hand`.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::{Card, Hand};

/// Player identifier (0-based seat index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Ids for seats `0..seat_count`, in seat order.
    pub fn seats(seat_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..seat_count as u8).map(PlayerId)
    }
}

/// Who decides which card a player draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Picks a position through the input collaborator.
    Human,
    /// Picks a uniformly random position.
    #[default]
    Computer,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    controller: Controller,
    hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>, controller: Controller) -> Self {
        Self {
            id,
            name: name.into(),
            controller,
            hand: Hand::new(),
        }
    }

    /// Set the starting hand.
    #[must_use]
    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hand = hand;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn controller(&self) -> Controller {
        self.controller
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.controller == Controller::Human
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn append(&mut self, card: Card) {
        self.hand.append(card);
    }

    pub fn remove_pairs(&mut self) -> Vec<Card> {
        self.hand.remove_pairs()
    }

    #[must_use]
    pub fn has_joker(&self) -> bool {
        self.hand.has_joker()
    }

    #[must_use]
    pub fn hand_is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn render(&self, owner_view: bool) -> String {
        self.hand.render(owner_view)
    }

    /// Take the card at `index` from `other`'s hand into this hand.
    ///
    /// The engine validates `index` before calling; an invalid one is
    /// reported as `OutOfRange` and leaves both hands untouched.
    pub fn draw_from(&mut self, other: &mut Player, index: usize) -> Result<Card, GameError> {
        let card = other.hand.remove_at(index)?;
        self.hand.append(card);
        Ok(card)
    }
}
