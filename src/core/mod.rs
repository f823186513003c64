//! Core types: players, configuration, errors and randomness.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, SeatConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::GameError;
pub use player::{Controller, Player, PlayerId};
pub use rng::{shuffle, GameRng, RandomSource, ScriptedRng};
