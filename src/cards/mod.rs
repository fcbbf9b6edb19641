//! Card representation, codec, and hand evaluation.
//!
//! - [`Card`]: A single card encoded as one byte, `rank * 4 + suit`
//! - [`Hand`]: An unordered set of cards as a 52-bit mask
//! - [`Deck`]: The complement of known cards, sampled without replacement
//! - [`Evaluator`] / [`Strength`]: Best 5-card hand out of any card set
//! - [`Street`]: Betting round inferred from the board
//!
//! The free functions in [`codec`] are the forgiving entry points used on
//! observed input: they filter and deduplicate instead of failing.
pub mod card;
pub use card::*;

pub mod codec;
pub use codec::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod street;
pub use street::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
