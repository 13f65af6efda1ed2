//! Game configuration.
//!
//! `GameConfig` holds the setup parameters that are not part of the fixed
//! card catalog: hand size, how many starter cards each player takes, the
//! player names, and the RNG seed.
//!
//! Starter cards are always the cheapest Economy type and the cheapest
//! Progress type; only the counts are configurable.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerPair};
use crate::cards::{CardType, Category};
use crate::error::ConfigError;

pub const DEFAULT_HAND_SIZE: usize = 5;
pub const DEFAULT_STARTING_ECONOMY: u32 = 7;
pub const DEFAULT_STARTING_PROGRESS: u32 = 3;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use automation_game::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_seed(99)
///     .with_player_names("Ada", "Grace")
///     .with_hand_size(6);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.hand_size, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards drawn at setup and after every cleanup.
    pub hand_size: usize,

    /// Copies of the cheapest Economy type each player starts with.
    pub starting_economy_cards: u32,

    /// Copies of the cheapest Progress type each player starts with.
    pub starting_progress_cards: u32,

    /// Display names, by seat.
    pub player_names: PlayerPair<String>,

    /// Seed for the game's single RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            starting_economy_cards: DEFAULT_STARTING_ECONOMY,
            starting_progress_cards: DEFAULT_STARTING_PROGRESS,
            player_names: PlayerPair::from_values("Alice".to_owned(), "Bob".to_owned()),
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_starting_cards(mut self, economy: u32, progress: u32) -> Self {
        self.starting_economy_cards = economy;
        self.starting_progress_cards = progress;
        self
    }

    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = PlayerPair::from_values(first.into(), second.into());
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Name of the player in `seat`.
    #[must_use]
    pub fn player_name(&self, seat: PlayerId) -> &str {
        &self.player_names[seat]
    }

    /// Smallest hand whose best possible draw pays for the capstone.
    ///
    /// ```
    /// use automation_game::core::GameConfig;
    ///
    /// // Three Dogecoin make 9 coins, enough for a Framework.
    /// assert_eq!(GameConfig::min_hand_size(), 3);
    /// ```
    #[must_use]
    pub fn min_hand_size() -> usize {
        let best_card = CardType::highest_value(Category::Economy).max(1);
        CardType::CAPSTONE.cost().div_ceil(best_card).max(1) as usize
    }

    /// Check the configuration can drive a game to its end.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }

        let minimum = Self::min_hand_size();
        if self.hand_size < minimum {
            return Err(ConfigError::HandTooSmall {
                hand_size: self.hand_size,
                minimum,
            });
        }

        for (seat, name) in self.player_names.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyPlayerName(seat));
            }
        }

        let first = &self.player_names[PlayerId::FIRST];
        if *first == self.player_names[PlayerId::SECOND] {
            return Err(ConfigError::DuplicatePlayerName(first.clone()));
        }

        Ok(())
    }
}
