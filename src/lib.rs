//! # old-maid
//!
//! An Old Maid card game engine: one human against computer players.
//!
//! ## Rules
//!
//! A 53-card deck (52 cards plus one joker) is shuffled and dealt
//! round-robin. Players discard same-rank pairs, then take turns drawing one
//! card from the next player's hand and discarding any pair it makes.
//! Players who run out of cards are out. When two players remain, the one
//! holding the joker loses.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: the shuffle and computer draws go through a
//!    `RandomSource`, so a seed (or a scripted sequence) replays a game.
//!
//! 2. **Explicit state machine**: `OldMaid` owns the roster and resolves
//!    one whole turn per call. Observers only ever see settled states.
//!
//! 3. **Thin collaborators**: prompting and printing live behind
//!    `TurnInput` and `TurnObserver`; the console versions are in `console`.
//!
//! ## Modules
//!
//! - `core`: players, configuration, errors, RNG
//! - `cards`: cards, hands, the deck
//! - `rules`: the turn engine, events and input handling
//! - `console`: terminal input and output
//!
//! ## Example
//!
//! ```
//! use old_maid::{EventLog, OldMaidBuilder, ScriptedInput};
//!
//! let mut game = OldMaidBuilder::new().seed(42).build().unwrap();
//! let mut input = ScriptedInput::repeating("0", 10_000);
//! let mut log = EventLog::new();
//!
//! let outcome = game.run(&mut input, &mut log).unwrap();
//! assert!(outcome.loser().is_some());
//! ```

pub mod cards;
pub mod console;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Controller, GameConfig, GameError, GameRng, Player, PlayerId, RandomSource, ScriptedRng,
    SeatConfig,
};

pub use crate::cards::{create_deck, Card, Hand, Rank, Suit, DECK_SIZE};

pub use crate::rules::{
    DrawPrompt, EventLog, GameEvent, HandSummary, OldMaid, OldMaidBuilder, Outcome, Phase,
    PlayerRef, ScriptedInput, Silent, TurnInput, TurnObserver, TurnResolution,
};
