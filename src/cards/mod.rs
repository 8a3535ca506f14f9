//! Card model: suits, ranks, identified cards and the deck.
//!
//! - `card`: `Card`, `CardId`, `Suit`, `Rank`
//! - `deck`: building the 55-card deck and shuffling it

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{build_deck, shuffle, DECK_SIZE, WILDCARD_COUNT};
