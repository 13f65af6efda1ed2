//! Game orchestration.
//!
//! ## Key Types
//!
//! - `GameEngine`: Owns supply, decks and RNG; runs the turn state machine
//! - `GamePhase`: `NotStarted`, `InProgress`, `Ended`
//! - `TurnRecord`: What one turn produced and bought

mod engine;

pub use engine::{GameEngine, GamePhase, TurnRecord};
