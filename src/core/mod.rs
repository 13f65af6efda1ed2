//! Core building blocks: players, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState, Randomizer, ScriptedRandomizer};
