//! The fixed card catalog.
//!
//! Every card in the game belongs to one of six `CardType`s. The catalog is
//! closed: types carry data (cost, value, supply, category) but no behavior
//! of their own, so they are modeled as a plain enum with lookup methods.
//!
//! | Type      | Category | Cost | Value | Supply |
//! |-----------|----------|------|-------|--------|
//! | Bitcoin   | Economy  | 0    | 1     | 60     |
//! | Ethereum  | Economy  | 3    | 2     | 40     |
//! | Dogecoin  | Economy  | 6    | 3     | 30     |
//! | Method    | Progress | 2    | 1     | 14     |
//! | Module    | Progress | 5    | 3     | 8      |
//! | Framework | Progress | 8    | 6     | 8      |

use serde::{Deserialize, Serialize};

/// What a card's value means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Value is spendable coins when the card is played.
    Economy,
    /// Value is points counted at game end.
    Progress,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Economy => write!(f, "Economy"),
            Category::Progress => write!(f, "Progress"),
        }
    }
}

/// Static data for one catalog row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub name: &'static str,
    pub cost: u32,
    pub value: u32,
    pub supply: u32,
    pub category: Category,
}

/// A card type from the fixed catalog.
///
/// Variants are declared in catalog order; `CardType::ALL` preserves it and
/// everything that iterates "all types" goes through that array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardType {
    Bitcoin,
    Ethereum,
    Dogecoin,
    Method,
    Module,
    Framework,
}

impl CardType {
    /// Every card type, in catalog order.
    pub const ALL: [CardType; 6] = [
        CardType::Bitcoin,
        CardType::Ethereum,
        CardType::Dogecoin,
        CardType::Method,
        CardType::Module,
        CardType::Framework,
    ];

    /// The Progress type whose exhaustion ends the game.
    pub const CAPSTONE: CardType = CardType::Framework;

    /// Catalog row for this type.
    #[must_use]
    pub const fn spec(self) -> CardSpec {
        match self {
            CardType::Bitcoin => CardSpec {
                name: "Bitcoin",
                cost: 0,
                value: 1,
                supply: 60,
                category: Category::Economy,
            },
            CardType::Ethereum => CardSpec {
                name: "Ethereum",
                cost: 3,
                value: 2,
                supply: 40,
                category: Category::Economy,
            },
            CardType::Dogecoin => CardSpec {
                name: "Dogecoin",
                cost: 6,
                value: 3,
                supply: 30,
                category: Category::Economy,
            },
            CardType::Method => CardSpec {
                name: "Method",
                cost: 2,
                value: 1,
                supply: 14,
                category: Category::Progress,
            },
            CardType::Module => CardSpec {
                name: "Module",
                cost: 5,
                value: 3,
                supply: 8,
                category: Category::Progress,
            },
            CardType::Framework => CardSpec {
                name: "Framework",
                cost: 8,
                value: 6,
                supply: 8,
                category: Category::Progress,
            },
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Acquisition cost in coins.
    #[must_use]
    pub const fn cost(self) -> u32 {
        self.spec().cost
    }

    /// Coins when played (Economy) or points at game end (Progress).
    #[must_use]
    pub const fn value(self) -> u32 {
        self.spec().value
    }

    /// Number of copies in a fresh supply.
    #[must_use]
    pub const fn supply_count(self) -> u32 {
        self.spec().supply
    }

    #[must_use]
    pub const fn category(self) -> Category {
        self.spec().category
    }

    #[must_use]
    pub const fn is_economy(self) -> bool {
        matches!(self.category(), Category::Economy)
    }

    #[must_use]
    pub const fn is_progress(self) -> bool {
        matches!(self.category(), Category::Progress)
    }

    #[must_use]
    pub const fn is_capstone(self) -> bool {
        matches!(self, CardType::Framework)
    }

    /// The cheapest type in a category. Ties go to the earliest declared.
    ///
    /// Used to pick starter cards: Bitcoin for Economy, Method for Progress.
    #[must_use]
    pub fn cheapest(category: Category) -> CardType {
        let mut cheapest: Option<CardType> = None;
        for card_type in Self::ALL.into_iter().filter(|t| t.category() == category) {
            match cheapest {
                Some(current) if current.cost() <= card_type.cost() => {}
                _ => cheapest = Some(card_type),
            }
        }
        // Both categories are populated in the fixed catalog.
        cheapest.unwrap_or(CardType::Bitcoin)
    }

    /// The largest value printed on any type in a category.
    #[must_use]
    pub fn highest_value(category: Category) -> u32 {
        Self::ALL
            .into_iter()
            .filter(|t| t.category() == category)
            .map(CardType::value)
            .max()
            .unwrap_or(0)
    }

    /// Look up a type by display name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<CardType> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
