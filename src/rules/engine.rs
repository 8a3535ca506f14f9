//! Move legality and state transitions.
//!
//! Every function here either applies a move completely or returns an error
//! with the table untouched. Checks happen before the first mutation.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::{Card, CardId, Suit};
use crate::core::{Action, EngineError, Participant, Phase, Rejection, TableState, Violation};

/// Legal cards from a hand. Sized for a freshly dealt hand.
pub type LegalPlays = SmallVec<[Card; 8]>;

/// Result of an accepted play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Ordinary card; the turn moved on.
    TurnPassed { next: Participant },
    /// Eight or bomb; the same seat must now name a suit.
    SuitChoiceRequired,
    /// The seat's hand is empty.
    Won,
}

/// Result of an accepted draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drew(Card),
    /// Draw pile was empty; the turn was skipped.
    Skipped,
}

/// Can `card` be played on `top` while `active_suit` is in force?
///
/// ```
/// use crazy_eights::cards::{Card, CardId, Rank, Suit};
/// use crazy_eights::rules::is_legal;
///
/// let top = Card::new(CardId::new(1), Suit::Spades, Rank::Seven);
/// let seven = Card::new(CardId::new(2), Suit::Diamonds, Rank::Seven);
/// let nine = Card::new(CardId::new(3), Suit::Clubs, Rank::Nine);
///
/// assert!(is_legal(&seven, &top, Suit::Hearts));
/// assert!(!is_legal(&nine, &top, Suit::Hearts));
/// ```
#[must_use]
pub fn is_legal(card: &Card, top: &Card, active_suit: Suit) -> bool {
    card.changes_suit() || card.matching_suit() == Some(active_suit) || card.rank == top.rank
}

/// The playable subset of `hand`, in hand order.
#[must_use]
pub fn legal_plays(hand: &[Card], top: &Card, active_suit: Suit) -> LegalPlays {
    hand.iter()
        .filter(|card| is_legal(card, top, active_suit))
        .copied()
        .collect()
}

/// Does `participant` hold at least one legal card right now?
#[must_use]
pub fn has_legal_play(state: &TableState, participant: Participant) -> bool {
    let top = state.top_card();
    state
        .hand(participant)
        .iter()
        .any(|card| is_legal(card, &top, state.active_suit()))
}

/// Nobody can play and there is nothing left to draw.
///
/// The game never ends on its own in this position; every turn is a skip.
#[must_use]
pub fn is_stalled(state: &TableState) -> bool {
    matches!(state.phase(), Phase::AwaitingMove(_))
        && state.draw_pile_len() == 0
        && Participant::ALL
            .iter()
            .all(|&p| !has_legal_play(state, p))
}

/// Check that `participant` may make a play or draw now.
fn ensure_can_move(state: &TableState, participant: Participant) -> Result<(), Rejection> {
    match state.phase() {
        Phase::Setup => Err(Rejection::NotDealt),
        Phase::Finished { .. } => Err(Rejection::GameOver),
        Phase::AwaitingSuitChoice(chooser) => Err(Rejection::SuitChoicePending { chooser }),
        Phase::AwaitingMove(current) if current != participant => Err(Rejection::OutOfTurn {
            expected: current,
            actual: participant,
        }),
        Phase::AwaitingMove(_) => Ok(()),
    }
}

/// Play `card_id` from `participant`'s hand.
pub fn apply_play(
    state: &mut TableState,
    participant: Participant,
    card_id: CardId,
) -> Result<PlayOutcome, EngineError> {
    ensure_can_move(state, participant)?;

    let card = state
        .hand(participant)
        .iter()
        .find(|c| c.id == card_id)
        .copied()
        .ok_or(Violation::CardNotInHand {
            participant,
            card: card_id,
        })?;

    let top = state.top_card();
    if !is_legal(&card, &top, state.active_suit()) {
        return Err(Rejection::NotPlayable {
            card,
            top,
            active_suit: state.active_suit(),
        }
        .into());
    }

    state
        .remove_from_hand(participant, card_id)
        .ok_or(Violation::CardNotInHand {
            participant,
            card: card_id,
        })?;
    state.push_discard(card);
    state.record(participant, Action::Play(card_id));
    debug!(%participant, %card, "card played");

    if state.hand(participant).is_empty() {
        state.set_phase(Phase::Finished {
            winner: participant,
        });
        info!(%participant, "hand emptied, game over");
        return Ok(PlayOutcome::Won);
    }

    if card.changes_suit() {
        state.set_phase(Phase::AwaitingSuitChoice(participant));
        return Ok(PlayOutcome::SuitChoiceRequired);
    }

    state.set_active_suit(card.suit);
    let next = participant.next();
    state.set_phase(Phase::AwaitingMove(next));
    Ok(PlayOutcome::TurnPassed { next })
}

/// Name the active suit after an eight or a bomb.
///
/// Returns the seat that acts next.
pub fn choose_suit(state: &mut TableState, suit: Suit) -> Result<Participant, EngineError> {
    let chooser = match state.phase() {
        Phase::AwaitingSuitChoice(chooser) => chooser,
        Phase::Finished { .. } => return Err(Rejection::GameOver.into()),
        Phase::Setup | Phase::AwaitingMove(_) => {
            return Err(Rejection::NoSuitChoicePending.into())
        }
    };

    state.set_active_suit(suit);
    state.record(chooser, Action::ChooseSuit(suit));
    let next = chooser.next();
    state.set_phase(Phase::AwaitingMove(next));
    debug!(participant = %chooser, %suit, "suit chosen");
    Ok(next)
}

/// Draw one card for `participant`, who must have no legal play.
///
/// An empty draw pile skips the turn instead.
pub fn apply_draw(
    state: &mut TableState,
    participant: Participant,
) -> Result<DrawOutcome, EngineError> {
    ensure_can_move(state, participant)?;

    if has_legal_play(state, participant) {
        return Err(Rejection::HasPlayableCard { participant }.into());
    }

    let outcome = match state.pop_draw_pile() {
        Some(card) => {
            state.add_to_hand(participant, card);
            debug!(%participant, "card drawn");
            DrawOutcome::Drew(card)
        }
        None => {
            info!(%participant, "draw pile is empty, turn skipped");
            DrawOutcome::Skipped
        }
    };

    state.record(participant, Action::Draw);
    state.set_phase(Phase::AwaitingMove(participant.next()));
    Ok(outcome)
}
