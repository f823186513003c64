//! Building a dealt game from a `GameConfig`.

use log::debug;

use super::engine::OldMaid;
use crate::core::config::{GameConfig, SeatConfig};
use crate::core::error::GameError;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::{GameRng, RandomSource};

/// Builder for creating an `OldMaid` game.
#[derive(Clone, Debug, Default)]
pub struct OldMaidBuilder {
    config: GameConfig,
}

impl OldMaidBuilder {
    /// Start from the default table: you against three computers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    /// Replace the seats.
    pub fn seats(mut self, seats: Vec<SeatConfig>) -> Self {
        self.config.seats = seats;
        self
    }

    /// Fix the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Validate the config and deal with a `GameRng`.
    ///
    /// Uses the configured seed, or one drawn from entropy.
    pub fn build(self) -> Result<OldMaid<GameRng>, GameError> {
        let rng = self
            .config
            .seed
            .map_or_else(GameRng::from_entropy, GameRng::new);
        debug!("dealing with seed {}", rng.seed());
        self.build_with_rng(rng)
    }

    /// Validate the config and deal with the given randomness source.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> Result<OldMaid<R>, GameError> {
        self.config.validate()?;
        Ok(OldMaid::deal(self.players(), rng))
    }

    fn players(&self) -> Vec<Player> {
        self.config
            .seats
            .iter()
            .zip(PlayerId::seats(self.config.player_count()))
            .map(|(seat, id)| Player::new(id, seat.name.clone(), seat.controller))
            .collect()
    }
}
