//! Card locations: the shared supply and each player's deck.
//!
//! ## Key Types
//!
//! - `CardSupply`: Shared bank of remaining counts per card type
//! - `PlayerDeck`: One player's draw pile, hand, played area and discard

pub mod deck;
pub mod supply;

pub use deck::{HandCards, PlayerDeck};
pub use supply::CardSupply;
