//! Table state: the complete record of one game.
//!
//! ## Phase
//!
//! Where the game is in its turn cycle. The acting seat is carried by the
//! phase itself, so turn and phase can never disagree.
//!
//! ## TableState
//!
//! - Hands (one per seat, insertion ordered)
//! - Draw pile (top = end of vec)
//! - Discard pile (top card kept separately, so it always exists)
//! - Active suit
//! - Action history
//!
//! Only the rules engine mutates a `TableState`; everything else reads it.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::error::{EngineError, Violation};
use super::participant::{Participant, ParticipantMap};
use crate::cards::{Card, CardId, Suit};

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Cards are being dealt.
    Setup,
    /// Waiting for the seat to play or draw.
    AwaitingMove(Participant),
    /// The seat played an eight or a bomb and must name a suit.
    AwaitingSuitChoice(Participant),
    /// The seat emptied their hand.
    Finished { winner: Participant },
}

impl Phase {
    /// The seat expected to act, if any.
    #[must_use]
    pub const fn turn(self) -> Option<Participant> {
        match self {
            Phase::AwaitingMove(p) | Phase::AwaitingSuitChoice(p) => Some(p),
            Phase::Setup | Phase::Finished { .. } => None,
        }
    }

    #[must_use]
    pub const fn winner(self) -> Option<Participant> {
        match self {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Phase::Finished { .. })
    }
}

/// Full table state including private hands.
///
/// Cloning is cheap enough to apply a move to a copy and commit it only
/// when every step succeeds; the action history is a persistent vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    hands: ParticipantMap<Vec<Card>>,
    draw_pile: Vec<Card>,
    discard_below: Vec<Card>,
    discard_top: Card,
    active_suit: Suit,
    phase: Phase,
    history: Vector<ActionRecord>,
    /// Cards on the table at assembly; conservation is checked against it.
    card_count: usize,
}

impl TableState {
    /// Assemble a table from its parts.
    ///
    /// `discard` is ordered bottom to top and must not be empty. The number
    /// of cards passed in becomes the count every later state must hold.
    pub fn from_parts(
        hands: ParticipantMap<Vec<Card>>,
        draw_pile: Vec<Card>,
        mut discard: Vec<Card>,
        active_suit: Suit,
        phase: Phase,
    ) -> Result<Self, EngineError> {
        let discard_top = discard.pop().ok_or(Violation::NoOpeningCard)?;
        let card_count = draw_pile.len()
            + hands.values().map(Vec::len).sum::<usize>()
            + discard.len()
            + 1;
        Ok(Self {
            hands,
            draw_pile,
            discard_below: discard,
            discard_top,
            active_suit,
            phase,
            history: Vector::new(),
            card_count,
        })
    }

    // === Reads ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The seat expected to act, `None` once finished.
    #[must_use]
    pub fn turn(&self) -> Option<Participant> {
        self.phase.turn()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Participant> {
        self.phase.winner()
    }

    #[must_use]
    pub fn active_suit(&self) -> Suit {
        self.active_suit
    }

    #[must_use]
    pub fn top_card(&self) -> Card {
        self.discard_top
    }

    /// Discard pile from bottom to top.
    pub fn discard(&self) -> impl Iterator<Item = &Card> {
        self.discard_below.iter().chain(std::iter::once(&self.discard_top))
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_below.len() + 1
    }

    #[must_use]
    pub fn hand(&self, participant: Participant) -> &[Card] {
        &self.hands[participant]
    }

    #[must_use]
    pub fn hand_sizes(&self) -> ParticipantMap<usize> {
        self.hands.map(|_, hand| hand.len())
    }

    /// Draw pile from bottom to top.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Cards across the draw pile, all hands and the discard pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.hands.values().map(Vec::len).sum::<usize>() + self.discard_len()
    }

    /// Iterate every card on the table.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile
            .iter()
            .chain(self.hands.values().flatten())
            .chain(self.discard())
    }

    /// Check that no card was lost or duplicated since assembly.
    pub fn verify_conservation(&self) -> Result<(), EngineError> {
        let actual = self.total_cards();
        if actual != self.card_count {
            return Err(Violation::CardCount {
                expected: self.card_count,
                actual,
            }
            .into());
        }

        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        for card in self.all_cards() {
            if !seen.insert(card.id) {
                return Err(Violation::DuplicateCard(card.id).into());
            }
        }
        Ok(())
    }

    // === Mutations (rules engine only) ===

    pub(crate) fn remove_from_hand(&mut self, participant: Participant, card: CardId) -> Option<Card> {
        let hand = &mut self.hands[participant];
        let pos = hand.iter().position(|c| c.id == card)?;
        Some(hand.remove(pos))
    }

    pub(crate) fn add_to_hand(&mut self, participant: Participant, card: Card) {
        self.hands[participant].push(card);
    }

    pub(crate) fn push_discard(&mut self, card: Card) {
        let previous = std::mem::replace(&mut self.discard_top, card);
        self.discard_below.push(previous);
    }

    pub(crate) fn pop_draw_pile(&mut self) -> Option<Card> {
        self.draw_pile.pop()
    }

    pub(crate) fn set_active_suit(&mut self, suit: Suit) {
        self.active_suit = suit;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn record(&mut self, participant: Participant, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(participant, action, sequence));
    }
}
