//! Error types for the simulation.
//!
//! Only acquisition can fail during normal play, and the engine treats that
//! as "no purchase this turn". The other variants report misuse of the API.

use thiserror::Error;

use crate::cards::CardType;
use crate::core::PlayerId;
use crate::game::GamePhase;

/// Failure to take a card from the supply.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionError {
    #[error("{0} is out of stock")]
    OutOfStock(CardType),
}

/// Invalid game configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("a hand of {hand_size} can never afford the capstone (need at least {minimum})")]
    HandTooSmall { hand_size: usize, minimum: usize },

    #[error("name for {0} is empty")]
    EmptyPlayerName(PlayerId),

    #[error("both players are named {0:?}")]
    DuplicatePlayerName(String),
}

/// A serialized player index outside the table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("player index {0} is out of range")]
pub struct PlayerIndexError(pub u8);

/// Errors surfaced by `GameEngine`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("game is {actual:?}, expected {expected:?}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
