//! Game rules that are pure functions of their inputs.
//!
//! - `choose_purchase`: the greedy buy heuristic
//! - `GameResult` / `FinalScore`: end-of-game comparison

pub mod purchase;
pub mod scoring;

pub use purchase::{choose_purchase, PURCHASE_PRIORITY};
pub use scoring::{FinalScore, GameResult};
