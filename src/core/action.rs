//! Action representation and history records.
//!
//! Every accepted move is one of three actions:
//! - "Play card X" (`Play`)
//! - "Draw" (`Draw`), which may resolve as a skip when the draw pile is empty
//! - "Choose suit" (`ChooseSuit`) after an eight or a bomb

use serde::{Deserialize, Serialize};

use super::participant::Participant;
use crate::cards::{CardId, Suit};

/// A game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Play a card from hand onto the discard pile.
    Play(CardId),
    /// Draw from the draw pile (a skip when it is empty).
    Draw,
    /// Name the active suit after a suit-changing play.
    ChooseSuit(Suit),
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub participant: Participant,

    /// The action taken.
    pub action: Action,

    /// Position in the game's history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(participant: Participant, action: Action, sequence: u32) -> Self {
        Self {
            participant,
            action,
            sequence,
        }
    }
}
