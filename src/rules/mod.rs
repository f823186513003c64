//! Game rules: the turn state machine and its collaborators.
//!
//! - `OldMaid`: deals, resolves turns, eliminates and concludes
//! - `OldMaidBuilder`: builds a dealt game from a `GameConfig`
//! - `TurnInput` / `TurnObserver`: the human's choices and the event sink

pub mod builder;
pub mod engine;
pub mod events;
pub mod input;

pub use builder::OldMaidBuilder;
pub use engine::{OldMaid, Outcome, Phase, TurnResolution};
pub use events::{EventLog, GameEvent, HandSummary, PlayerRef, Silent, TurnObserver};
pub use input::{parse_choice, DrawPrompt, ScriptedInput, TurnInput};
