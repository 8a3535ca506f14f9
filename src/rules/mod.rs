//! Rules of the game.
//!
//! - `engine`: legality and the play / suit choice / draw transitions
//! - `setup`: dealing a fresh table
//!
//! `is_legal` is the single playability check for the human and both bots.

pub mod engine;
pub mod setup;

pub use engine::{
    apply_draw, apply_play, choose_suit, has_legal_play, is_legal, is_stalled, legal_plays,
    DrawOutcome, LegalPlays, PlayOutcome,
};
pub use setup::{deal, HAND_SIZE};
