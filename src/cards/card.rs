//! Card values: suits, ranks and the joker.
//!
//! A `Card` is either a suited card or the single joker. Encoding the joker
//! as its own variant means "suit is Joker iff rank is the joker marker"
//! cannot be violated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Full English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    /// First character of the name, used in the short display form.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

/// Card rank in `1..=13`, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, or `None` outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Iterate over all thirteen ranks, ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Short token: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub fn token(self) -> &'static str {
        const TOKENS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        TOKENS[usize::from(self.value() - 1)]
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} not in 1..=13", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.value()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Suited { suit: Suit, rank: Rank },
    Joker,
}

impl Card {
    /// Create a suited card.
    #[must_use]
    pub const fn suited(suit: Suit, rank: Rank) -> Self {
        Card::Suited { suit, rank }
    }

    /// The rank, or `None` for the joker.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(rank),
            Card::Joker => None,
        }
    }

    /// The suit, or `None` for the joker.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(suit),
            Card::Joker => None,
        }
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Card::Joker)
    }
}

/// `Joker`, or rank token plus suit initial (`AH`, `10D`, `KS`).
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { suit, rank } => write!(f, "{}{}", rank, suit.initial()),
            Card::Joker => f.write_str("Joker"),
        }
    }
}
