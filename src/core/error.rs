//! Error type shared by hands, players and the engine.

use thiserror::Error;

/// Failures surfaced by the engine API.
///
/// A cancelled prompt is not an error: it concludes the game as
/// [`Outcome::Aborted`](crate::rules::Outcome::Aborted).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// An index passed to a hand removal or a draw is outside the hand.
    #[error("index {index} out of range for hand of {len} cards")]
    OutOfRange { index: usize, len: usize },

    /// The human typed something that is not a valid card position.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A `GameConfig` that cannot start a game.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
