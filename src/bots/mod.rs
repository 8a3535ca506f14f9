//! Computer-controlled opponents.
//!
//! A bot only sees its own hand plus the public table (`BotView`), and its
//! moves go through the same rules as the human player's.

pub mod policy;

pub use policy::{most_common_suit, BotMove, BotPolicy, BotView, SuitCounterBot};
