//! Game configuration types.
//!
//! - `SeatConfig`: name and controller for one seat
//! - `GameConfig`: the seats in turn order plus an optional seed
//!
//! The default table is one human ("You") followed by three computer
//! players, with the human taking the first turn.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::Controller;

/// Smallest table that can play.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name, unique at the table.
    pub name: String,

    /// Human or computer.
    #[serde(default)]
    pub controller: Controller,
}

impl SeatConfig {
    /// A human-controlled seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
        }
    }

    /// A computer-controlled seat.
    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Computer,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats in turn order. The deal starts at the first seat.
    pub seats: Vec<SeatConfig>,

    /// Fixed seed for a reproducible game. `None` draws one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: vec![
                SeatConfig::human("You"),
                SeatConfig::computer("CPU1"),
                SeatConfig::computer("CPU2"),
                SeatConfig::computer("CPU3"),
            ],
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with no seats.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            seats: Vec::new(),
            seed: None,
        }
    }

    /// Add a seat after the existing ones.
    #[must_use]
    pub fn with_seat(mut self, seat: SeatConfig) -> Self {
        self.seats.push(seat);
        self
    }

    /// Fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Check that this configuration can start a game.
    ///
    /// Requires 2-8 seats, exactly one human and unique non-empty names.
    pub fn validate(&self) -> Result<(), GameError> {
        let count = self.seats.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::InvalidConfig(format!(
                "need {}-{} players, got {}",
                MIN_PLAYERS, MAX_PLAYERS, count
            )));
        }

        let humans = self
            .seats
            .iter()
            .filter(|s| s.controller == Controller::Human)
            .count();
        if humans != 1 {
            return Err(GameError::InvalidConfig(format!(
                "need exactly one human player, got {}",
                humans
            )));
        }

        let mut names = FxHashSet::default();
        for seat in &self.seats {
            if seat.name.trim().is_empty() {
                return Err(GameError::InvalidConfig("player name is empty".to_string()));
            }
            if !names.insert(seat.name.as_str()) {
                return Err(GameError::InvalidConfig(format!(
                    "duplicate player name {:?}",
                    seat.name
                )));
            }
        }

        Ok(())
    }
}
