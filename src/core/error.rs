//! Engine errors.
//!
//! Two families:
//! - `IllegalMove`: an advisory rejection. Table state is unchanged and the
//!   caller may simply try something else.
//! - `InvariantViolation`: a caller or engine bug. The card-conservation
//!   invariant has already been broken upstream, so the game cannot be
//!   trusted to continue.

use thiserror::Error;

use super::participant::Participant;
use crate::cards::{Card, CardId, Suit};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the cards have not been dealt")]
    NotDealt,

    #[error("the game is over")]
    GameOver,

    #[error("out of turn: {actual} moved while waiting on {expected}")]
    OutOfTurn {
        expected: Participant,
        actual: Participant,
    },

    #[error("{chooser} must choose a suit first")]
    SuitChoicePending { chooser: Participant },

    #[error("no suit choice is pending")]
    NoSuitChoicePending,

    #[error("{card} cannot be played on {top} while {active_suit} are active")]
    NotPlayable {
        card: Card,
        top: Card,
        active_suit: Suit,
    },

    #[error("{participant} holds a playable card and cannot draw")]
    HasPlayableCard { participant: Participant },

    #[error("{participant} is played by the computer")]
    BotSeat { participant: Participant },
}

/// A broken engine invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{card} is not in {participant}'s hand")]
    CardNotInHand {
        participant: Participant,
        card: CardId,
    },

    #[error("table holds {actual} cards, expected {expected}")]
    CardCount { expected: usize, actual: usize },

    #[error("{0} appears more than once on the table")]
    DuplicateCard(CardId),

    #[error("no card can open the discard pile")]
    NoOpeningCard,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] Rejection),

    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] Violation),
}

impl EngineError {
    /// Does this error mean the game state can no longer be trusted?
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::InvariantViolation(_))
    }

    /// The rejection reason, if this is an illegal move.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            EngineError::IllegalMove(r) => Some(*r),
            EngineError::InvariantViolation(_) => None,
        }
    }
}
