//! A player's hand and its pair-removal rule.
//!
//! Hands are backed by `im::Vector` so observers can take O(1) snapshots
//! between turns without copying card lists.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank};
use crate::core::error::GameError;

/// Ordered cards held by one player.
///
/// Order only matters for indexing: the human picks by position and
/// computer draws pick a uniform position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the end of the hand.
    pub fn append(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the card at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::OutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Discard every same-rank pair and return the discarded cards.
    ///
    /// A rank held `n` times loses `n / 2 * 2` cards, lowest positions
    /// first, so an odd group keeps its last card. The joker never pairs.
    pub fn remove_pairs(&mut self) -> Vec<Card> {
        let mut positions: FxHashMap<Rank, SmallVec<[usize; 4]>> = FxHashMap::default();
        for (i, card) in self.cards.iter().enumerate() {
            if let Some(rank) = card.rank() {
                positions.entry(rank).or_default().push(i);
            }
        }

        let mut discard = vec![false; self.cards.len()];
        let mut any = false;
        for group in positions.values() {
            let paired = group.len() / 2 * 2;
            for &i in &group[..paired] {
                discard[i] = true;
                any = true;
            }
        }
        if !any {
            return Vec::new();
        }

        let mut kept = Vector::new();
        let mut discarded = Vec::new();
        for (card, drop) in self.cards.iter().zip(discard) {
            if drop {
                discarded.push(*card);
            } else {
                kept.push_back(*card);
            }
        }
        self.cards = kept;
        discarded
    }

    #[must_use]
    pub fn has_joker(&self) -> bool {
        self.cards.iter().any(|c| c.is_joker())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Iterate over the cards in hand order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// How many cards of `rank` are held.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank() == Some(rank)).count()
    }

    /// Human-readable summary.
    ///
    /// The owner sees `1:AH, 2:Joker` (1-based positions); anyone else only
    /// sees how many cards there are.
    #[must_use]
    pub fn render(&self, owner_view: bool) -> String {
        if owner_view {
            self.cards
                .iter()
                .enumerate()
                .map(|(i, card)| format!("{}:{}", i + 1, card))
                .collect::<Vec<_>>()
                .join(", ")
        } else if self.cards.len() == 1 {
            "(1 card)".to_string()
        } else {
            format!("({} cards)", self.cards.len())
        }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
