//! Card instances.
//!
//! A `Card` is a value object: it carries its type and nothing else, so two
//! cards of the same type are interchangeable and compare equal.

use serde::{Deserialize, Serialize};

use super::catalog::{CardType, Category};

/// A single card held by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    card_type: CardType,
}

impl Card {
    /// Create a card of the given type.
    #[must_use]
    pub const fn new(card_type: CardType) -> Self {
        Self { card_type }
    }

    #[must_use]
    pub const fn card_type(self) -> CardType {
        self.card_type
    }

    #[must_use]
    pub const fn cost(self) -> u32 {
        self.card_type.cost()
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.card_type.value()
    }

    #[must_use]
    pub const fn category(self) -> Category {
        self.card_type.category()
    }

    #[must_use]
    pub const fn is_economy(self) -> bool {
        self.card_type.is_economy()
    }

    #[must_use]
    pub const fn is_progress(self) -> bool {
        self.card_type.is_progress()
    }
}

impl From<CardType> for Card {
    fn from(card_type: CardType) -> Self {
        Self::new(card_type)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.card_type)
    }
}
