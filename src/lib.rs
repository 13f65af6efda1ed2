//! # automation-game
//!
//! Simulation engine for *Automation: The Game*, a two-player deck-building
//! card game played entirely by a greedy heuristic.
//!
//! Each turn the active player plays every coin-producing card in hand,
//! buys at most one card from the shared supply, discards, and draws a new
//! hand. The game ends once the capstone card (Framework) is sold out; the
//! player whose acquired cards carry more Progress points wins.
//!
//! ## Design Principles
//!
//! 1. **Closed Catalog**: Six card types, fixed data, no per-card behavior.
//!
//! 2. **Injected Randomness**: Every shuffle and the starting coin flip go
//!    through one `Randomizer` per game. A seed reproduces a game exactly.
//!
//! 3. **Nothing Is Destroyed**: Cards only move between a player's zones,
//!    so each player's zones always hold exactly the cards they acquired.
//!
//! ## Modules
//!
//! - `cards`: Card types and card values
//! - `core`: Players, RNG, configuration
//! - `zones`: Shared supply and per-player decks
//! - `rules`: Purchase heuristic and scoring
//! - `game`: Turn state machine
//! - `report`: Observational game reporting
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod report;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, CardType, Category};
pub use crate::core::{GameConfig, GameRng, PlayerId, PlayerPair, Randomizer, ScriptedRandomizer};
pub use crate::error::{AcquisitionError, ConfigError, EngineError, PlayerIndexError};
pub use crate::game::{GameEngine, GamePhase, TurnRecord};
pub use crate::report::{ConsoleReporter, MemoryReporter, NullReporter, Reporter, Verbosity};
pub use crate::rules::{choose_purchase, FinalScore, GameResult};
pub use crate::zones::{CardSupply, PlayerDeck};
