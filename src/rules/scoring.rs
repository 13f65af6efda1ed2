//! End-of-game scoring.
//!
//! A player's score is the total Progress value of every card they ever
//! acquired. Economy cards score nothing.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher score.
    Winner(PlayerId),
    /// Equal scores.
    Tie,
}

impl GameResult {
    /// Compare two final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerPair<u32>) -> Self {
        let first = scores[PlayerId::FIRST];
        let second = scores[PlayerId::SECOND];
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Final scores and the outcome they imply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub scores: PlayerPair<u32>,
    pub result: GameResult,
}

impl FinalScore {
    #[must_use]
    pub fn new(scores: PlayerPair<u32>) -> Self {
        let result = GameResult::from_scores(&scores);
        Self { scores, result }
    }

    /// One-line verdict, e.g. `Alice wins with 30 points (vs 24 points)`.
    #[must_use]
    pub fn describe(&self, names: &PlayerPair<String>) -> String {
        match self.result {
            GameResult::Winner(winner) => format!(
                "{} wins with {} points (vs {} points)",
                names[winner],
                self.scores[winner],
                self.scores[winner.opponent()]
            ),
            GameResult::Tie => format!(
                "Tie! Both players have {} points",
                self.scores[PlayerId::FIRST]
            ),
        }
    }
}
