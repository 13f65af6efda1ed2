//! The purchase heuristic.
//!
//! Both players buy the same way: walk a fixed priority list from most to
//! least valuable and take the first type that is still in the supply and
//! costs no more than the coins on hand. Progress types come first, largest
//! value first, then Economy types, largest cost first. At most one card is
//! bought per turn; leftover coins are lost.

use crate::cards::CardType;

/// Types in the order the heuristic considers them.
pub const PURCHASE_PRIORITY: [CardType; 6] = [
    CardType::Framework,
    CardType::Module,
    CardType::Method,
    CardType::Dogecoin,
    CardType::Ethereum,
    CardType::Bitcoin,
];

/// Pick the card type to buy with `coins`, given which types are available.
///
/// Returns `None` when nothing available is affordable.
///
/// ```
/// use automation_game::cards::CardType;
/// use automation_game::rules::choose_purchase;
///
/// let all = CardType::ALL;
/// assert_eq!(choose_purchase(8, &all), Some(CardType::Framework));
/// assert_eq!(choose_purchase(4, &all), Some(CardType::Method));
/// assert_eq!(choose_purchase(1, &all), Some(CardType::Bitcoin));
/// ```
#[must_use]
pub fn choose_purchase(coins: u32, available: &[CardType]) -> Option<CardType> {
    PURCHASE_PRIORITY
        .into_iter()
        .find(|t| t.cost() <= coins && available.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    #[test]
    fn test_priority_covers_catalog_once() {
        let mut sorted = PURCHASE_PRIORITY;
        sorted.sort();
        assert_eq!(sorted, CardType::ALL);
    }

    #[test]
    fn test_priority_follows_category_rule() {
        let split = PURCHASE_PRIORITY
            .iter()
            .position(|t| t.category() == Category::Economy)
            .unwrap();
        let (progress, economy) = PURCHASE_PRIORITY.split_at(split);

        assert!(progress.iter().all(|t| t.is_progress()));
        assert!(economy.iter().all(|t| t.is_economy()));
        assert!(progress.windows(2).all(|w| w[0].value() >= w[1].value()));
        assert!(economy.windows(2).all(|w| w[0].cost() >= w[1].cost()));
    }

    #[test]
    fn test_eight_coins_buys_capstone() {
        assert_eq!(choose_purchase(8, &CardType::ALL), Some(CardType::Framework));
        assert_eq!(choose_purchase(12, &CardType::ALL), Some(CardType::Framework));
    }

    #[test]
    fn test_progress_beats_economy() {
        // Dogecoin is affordable too, but Module outranks it.
        assert_eq!(choose_purchase(6, &CardType::ALL), Some(CardType::Module));
        assert_eq!(choose_purchase(3, &CardType::ALL), Some(CardType::Method));
    }

    #[test]
    fn test_falls_back_when_sold_out() {
        let available = [CardType::Bitcoin, CardType::Ethereum, CardType::Dogecoin];
        assert_eq!(choose_purchase(8, &available), Some(CardType::Dogecoin));
        assert_eq!(choose_purchase(5, &available), Some(CardType::Ethereum));
        assert_eq!(choose_purchase(0, &available), Some(CardType::Bitcoin));
    }

    #[test]
    fn test_nothing_affordable() {
        let available = [CardType::Module, CardType::Framework];
        assert_eq!(choose_purchase(4, &available), None);
        assert_eq!(choose_purchase(100, &[]), None);
    }
}
