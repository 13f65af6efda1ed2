//! The shared card supply.
//!
//! The supply is a bank of remaining counts per `CardType`. Counts only go
//! down: a successful `acquire` removes one copy and nothing ever returns a
//! card to the bank. The game ends when the capstone pile is empty.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Card, CardType};
use crate::error::AcquisitionError;

/// Remaining purchasable copies of each card type.
///
/// ## Usage
///
/// ```
/// use automation_game::cards::CardType;
/// use automation_game::zones::CardSupply;
///
/// let mut supply = CardSupply::new();
/// assert_eq!(supply.remaining(CardType::Framework), 8);
///
/// let card = supply.acquire(CardType::Framework).unwrap();
/// assert_eq!(card.card_type(), CardType::Framework);
/// assert_eq!(supply.remaining(CardType::Framework), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSupply {
    counts: FxHashMap<CardType, u32>,
}

impl Default for CardSupply {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSupply {
    /// Create a full supply from the catalog counts.
    #[must_use]
    pub fn new() -> Self {
        Self::from_counts(CardType::ALL.into_iter().map(|t| (t, t.supply_count())))
    }

    /// Create a supply with explicit counts. Types not listed start at 0.
    ///
    /// Later entries for the same type replace earlier ones.
    pub fn from_counts(counts: impl IntoIterator<Item = (CardType, u32)>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    /// Copies of `card_type` left in the bank.
    #[must_use]
    pub fn remaining(&self, card_type: CardType) -> u32 {
        self.counts.get(&card_type).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_available(&self, card_type: CardType) -> bool {
        self.remaining(card_type) > 0
    }

    /// Take one copy of `card_type` out of the bank.
    ///
    /// `OutOfStock` is an ordinary outcome; callers are expected to carry on
    /// without a card.
    pub fn acquire(&mut self, card_type: CardType) -> Result<Card, AcquisitionError> {
        match self.counts.get_mut(&card_type) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(Card::new(card_type))
            }
            _ => Err(AcquisitionError::OutOfStock(card_type)),
        }
    }

    /// Types with at least one copy left, in catalog order.
    #[must_use]
    pub fn available_types(&self) -> SmallVec<[CardType; 6]> {
        CardType::ALL
            .into_iter()
            .filter(|&t| self.is_available(t))
            .collect()
    }

    /// True once the capstone pile is empty. This is the only end condition.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_available(CardType::CAPSTONE)
    }

    /// Total copies left across all types.
    #[must_use]
    pub fn total_remaining(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl std::fmt::Display for CardSupply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Supply Status:")?;
        for card_type in CardType::ALL {
            writeln!(f, "  {}: {}", card_type, self.remaining(card_type))?;
        }
        Ok(())
    }
}
