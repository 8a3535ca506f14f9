//! # crazy-eights
//!
//! Rules engine and turn scheduler for a three-seat Crazy Eights variant:
//! one human player against two bots, with a 55-card deck (52 standard
//! cards plus three wild "bombs").
//!
//! ## Rules
//!
//! - Each seat is dealt 8 cards; the top remaining card opens the discard
//!   pile (never an eight).
//! - A card is playable when it is an eight or a bomb, matches the active
//!   suit, or matches the rank of the top card.
//! - Eights and bombs let the player name the next active suit.
//! - A seat with no playable card draws one; an empty draw pile skips the
//!   turn instead.
//! - The first seat to empty its hand wins.
//!
//! ## Design
//!
//! - **Single writer**: only the rules engine mutates a `TableState`, and only
//!   through `TurnScheduler`, which commits each move to a copy first.
//! - **Card conservation**: every card is in exactly one place at all times;
//!   this is checked after every committed operation.
//! - **Same rules for everyone**: bots go through the same legality checks as
//!   the human player.
//!
//! ## Modules
//!
//! - `core`: seats, table state, actions, errors, RNG, configuration
//! - `cards`: suits, ranks, cards and the deck
//! - `rules`: legality, transitions and dealing
//! - `bots`: bot view and decision policies
//! - `scheduler`: turn scheduler, async session and snapshots
//! - `logging`: subscriber setup for hosts and tests

pub mod core;
pub mod cards;
pub mod rules;
pub mod bots;
pub mod scheduler;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    Participant, ParticipantMap, SEAT_COUNT,
    GameRng, EngineConfig,
    Action, ActionRecord,
    EngineError, Rejection, Violation,
    Phase, TableState,
};

pub use crate::cards::{Card, CardId, Rank, Suit, DECK_SIZE, WILDCARD_COUNT};

pub use crate::rules::{is_legal, DrawOutcome, PlayOutcome, HAND_SIZE};

pub use crate::bots::{BotMove, BotPolicy, BotView, SuitCounterBot};

pub use crate::scheduler::{Session, TableSnapshot, TurnScheduler};
