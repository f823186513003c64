//! Events the engine reports to its output collaborator.
//!
//! Every event carries owned data (names, renderings) so an observer never
//! needs to borrow the engine while a turn is being resolved.

use serde::{Deserialize, Serialize};

use super::engine::Outcome;
use crate::cards::Card;
use crate::core::player::{Player, PlayerId};

/// Stable reference to a player: seat id plus display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
}

impl From<&Player> for PlayerRef {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
        }
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// One line of the per-turn table summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub player: PlayerRef,
    pub cards: usize,
    /// Indexed card list for the human, card count for everyone else.
    pub rendering: String,
}

impl HandSummary {
    /// Summarize `player`, revealing cards only for the human.
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self {
            player: player.into(),
            cards: player.hand_size(),
            rendering: player.render(player.is_human()),
        }
    }
}

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Cards are dealt and initial pairs discarded.
    Started {
        hands: Vec<HandSummary>,
        /// Players whose whole deal paired off.
        finished: Vec<PlayerRef>,
    },

    /// `active` is about to draw from `target`.
    TurnStarted {
        turn: u32,
        active: PlayerRef,
        target: PlayerRef,
        hands: Vec<HandSummary>,
    },

    /// The human typed something that is not a valid position.
    InvalidChoice { input: String, reason: String },

    /// A card moved between hands. `revealed` is set when the drawer is the
    /// human, who gets to see what they drew.
    CardDrawn {
        drawer: PlayerRef,
        source: PlayerRef,
        card: Card,
        revealed: bool,
    },

    /// `player` discarded matched pairs.
    PairsDiscarded { player: PlayerRef, cards: Vec<Card> },

    /// `player` ran out of cards and left the roster.
    PlayerFinished { player: PlayerRef },

    /// The game is over.
    Concluded(Outcome),
}

/// Output collaborator.
pub trait TurnObserver {
    fn observe(&mut self, event: &GameEvent);
}

/// Observer that records every event, in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `TurnStarted` events seen.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::TurnStarted { .. }))
            .count()
    }

    /// Players in the order they finished, including any who finished on
    /// the deal.
    #[must_use]
    pub fn finishing_order(&self) -> Vec<PlayerRef> {
        let mut order = Vec::new();
        for event in &self.events {
            match event {
                GameEvent::Started { finished, .. } => order.extend(finished.iter().cloned()),
                GameEvent::PlayerFinished { player } => order.push(player.clone()),
                _ => {}
            }
        }
        order
    }
}

impl TurnObserver for EventLog {
    fn observe(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl TurnObserver for Silent {
    fn observe(&mut self, _event: &GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::player::Controller;

    #[test]
    fn test_hand_summary_hides_computer_cards() {
        let hand: crate::cards::Hand = [Card::suited(Suit::Hearts, Rank::ACE), Card::Joker]
            .into_iter()
            .collect();

        let human = Player::new(PlayerId::new(0), "You", Controller::Human).with_hand(hand.clone());
        let cpu = Player::new(PlayerId::new(1), "CPU1", Controller::Computer).with_hand(hand);

        assert_eq!(HandSummary::of(&human).rendering, "1:AH, 2:Joker");
        assert_eq!(HandSummary::of(&cpu).rendering, "(2 cards)");
        assert_eq!(HandSummary::of(&cpu).cards, 2);
    }

    #[test]
    fn test_event_log_records_in_order() {
        let a = PlayerRef { id: PlayerId::new(0), name: "A".to_string() };
        let b = PlayerRef { id: PlayerId::new(1), name: "B".to_string() };

        let mut log = EventLog::new();
        log.observe(&GameEvent::Started { hands: vec![], finished: vec![b.clone()] });
        log.observe(&GameEvent::TurnStarted {
            turn: 1,
            active: a.clone(),
            target: b.clone(),
            hands: vec![],
        });
        log.observe(&GameEvent::PlayerFinished { player: a.clone() });

        assert_eq!(log.events.len(), 3);
        assert_eq!(log.turns(), 1);
        assert_eq!(log.finishing_order(), vec![b, a]);
    }

    #[test]
    fn test_player_ref_display() {
        let player = Player::new(PlayerId::new(3), "CPU3", Controller::Computer);
        let r = PlayerRef::from(&player);
        assert_eq!(r.id, PlayerId::new(3));
        assert_eq!(r.to_string(), "CPU3");
    }
}
