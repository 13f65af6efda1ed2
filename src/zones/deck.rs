//! A player's personal deck.
//!
//! Each player owns four zones:
//!
//! - **draw pile**: ordered, front is the next card drawn
//! - **hand**: cards currently held
//! - **played**: cards committed this turn
//! - **discard**: spent cards waiting to be reshuffled
//!
//! plus the lifetime record of every card the player has acquired. Cards
//! only move between zones; none is ever removed from the game, so the four
//! zones together always hold exactly the acquired cards.
//!
//! ## Reshuffle-on-empty
//!
//! `draw_one` is the single transition that takes a card off the draw pile.
//! When the draw pile is empty it first permutes the whole discard pile and
//! moves it into the draw pile. This is the only way discarded cards come
//! back into circulation.

use std::collections::VecDeque;

use im::Vector;
use smallvec::SmallVec;

use crate::cards::{Card, CardType};
use crate::core::Randomizer;

/// Inline capacity for hand and played zones. Covers the usual hand size.
pub type HandCards = SmallVec<[Card; 8]>;

/// Four-zone deck plus acquisition record.
///
/// ## Usage
///
/// ```
/// use automation_game::cards::{Card, CardType};
/// use automation_game::core::ScriptedRandomizer;
/// use automation_game::zones::PlayerDeck;
///
/// let mut rng = ScriptedRandomizer::new();
/// let mut deck = PlayerDeck::new();
/// deck.seed_starting_card(Card::new(CardType::Bitcoin));
/// deck.seed_starting_card(Card::new(CardType::Method));
///
/// assert_eq!(deck.draw(5, &mut rng), 2);
/// assert_eq!(deck.play_economy_cards(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlayerDeck {
    draw_pile: VecDeque<Card>,
    hand: HandCards,
    played: HandCards,
    discard: Vec<Card>,
    acquired: Vector<Card>,
}

impl PlayerDeck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Acquisition ===

    /// Put a starter card at the bottom of the draw pile.
    ///
    /// Setup only. Counts as an acquisition.
    pub fn seed_starting_card(&mut self, card: Card) {
        self.acquired.push_back(card);
        self.draw_pile.push_back(card);
    }

    /// Put a newly bought card into the discard pile.
    ///
    /// It reaches the hand only after a later reshuffle.
    pub fn receive_acquired_card(&mut self, card: Card) {
        self.acquired.push_back(card);
        self.discard.push(card);
    }

    // === Drawing ===

    /// Shuffle the current draw pile in place.
    pub fn shuffle_draw_pile(&mut self, rng: &mut impl Randomizer) {
        rng.shuffle_cards(self.draw_pile.make_contiguous());
    }

    /// Move one card from the draw pile into the hand.
    ///
    /// Reshuffles the discard pile into the draw pile first if the draw pile
    /// is empty. Returns `None` only when both piles are empty.
    pub fn draw_one(&mut self, rng: &mut impl Randomizer) -> Option<Card> {
        if self.draw_pile.is_empty() {
            if self.discard.is_empty() {
                return None;
            }
            self.reshuffle_discard(rng);
        }

        let card = self.draw_pile.pop_front()?;
        self.hand.push(card);
        Some(card)
    }

    /// Draw up to `count` cards. Returns how many were actually drawn.
    ///
    /// Running out of cards stops the draw early; that is not an error.
    pub fn draw(&mut self, count: usize, rng: &mut impl Randomizer) -> usize {
        let mut drawn = 0;
        while drawn < count && self.draw_one(rng).is_some() {
            drawn += 1;
        }
        drawn
    }

    fn reshuffle_discard(&mut self, rng: &mut impl Randomizer) {
        let mut cards = std::mem::take(&mut self.discard);
        rng.shuffle_cards(&mut cards);
        self.draw_pile.extend(cards);
    }

    // === Turn actions ===

    /// Move every Economy card from hand to the played area.
    ///
    /// Progress cards stay in hand. Returns the coins produced.
    pub fn play_economy_cards(&mut self) -> u32 {
        let mut coins = 0;
        let mut kept = HandCards::new();

        for card in self.hand.drain(..) {
            if card.is_economy() {
                coins += card.value();
                self.played.push(card);
            } else {
                kept.push(card);
            }
        }

        self.hand = kept;
        coins
    }

    /// Discard the hand and the played area.
    pub fn cleanup(&mut self) {
        self.discard.extend(self.hand.drain(..));
        self.discard.extend(self.played.drain(..));
    }

    // === Scoring ===

    /// Sum of Progress values over every card ever acquired.
    #[must_use]
    pub fn total_progress_value(&self) -> u32 {
        self.acquired
            .iter()
            .filter(|c| c.is_progress())
            .map(|c| c.value())
            .sum()
    }

    /// Coins the hand would produce if played now.
    #[must_use]
    pub fn coins_in_hand(&self) -> u32 {
        self.hand
            .iter()
            .filter(|c| c.is_economy())
            .map(|c| c.value())
            .sum()
    }

    /// Per-type counts of acquired cards, catalog order, zero counts omitted.
    #[must_use]
    pub fn composition(&self) -> Vec<(CardType, usize)> {
        CardType::ALL
            .into_iter()
            .map(|t| (t, self.acquired.iter().filter(|c| c.card_type() == t).count()))
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    // === Views ===

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Owned copy of the hand.
    #[must_use]
    pub fn snapshot_hand(&self) -> Vec<Card> {
        self.hand.to_vec()
    }

    /// Owned copy of the played area.
    #[must_use]
    pub fn snapshot_played(&self) -> Vec<Card> {
        self.played.to_vec()
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn played_len(&self) -> usize {
        self.played.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards across all four zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.played.len() + self.discard.len()
    }

    /// Cards ever acquired, starters included.
    #[must_use]
    pub fn acquired_count(&self) -> usize {
        self.acquired.len()
    }

    /// The lifetime acquisition record, in acquisition order.
    #[must_use]
    pub fn acquired(&self) -> &Vector<Card> {
        &self.acquired
    }
}
