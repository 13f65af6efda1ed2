//! Card system: the fixed catalog and card instances.
//!
//! ## Key Types
//!
//! - `CardType`: One of the six catalog entries (cost, value, supply, category)
//! - `Category`: Economy (spendable coins) or Progress (end-game points)
//! - `Card`: An interchangeable value object tagged with a `CardType`

pub mod card;
pub mod catalog;

pub use card::Card;
pub use catalog::{CardSpec, CardType, Category};
