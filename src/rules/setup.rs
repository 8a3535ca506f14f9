//! Dealing a new table.

use tracing::{debug, info};

use crate::cards::{build_deck, shuffle, Card, Rank, DECK_SIZE};
use crate::core::{EngineError, GameRng, Participant, ParticipantMap, Phase, TableState, Violation};

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 8;

/// Build, shuffle and deal a fresh table.
///
/// Each seat gets `HAND_SIZE` cards in turn order, then one card opens the
/// discard pile. An eight drawn as the opening card goes back under the draw
/// pile and another is drawn. Bombs are accepted as the opening card; the
/// active suit then starts as the bomb's placeholder suit.
pub fn deal(rng: &mut GameRng) -> Result<TableState, EngineError> {
    let mut draw_pile = shuffle(&build_deck(), rng);

    let mut deal_hand = || -> Vec<Card> {
        let split = draw_pile.len().saturating_sub(HAND_SIZE);
        let mut hand = draw_pile.split_off(split);
        hand.reverse();
        hand
    };
    let player = deal_hand();
    let bot1 = deal_hand();
    let bot2 = deal_hand();

    let opening = open_discard(&mut draw_pile)?;
    debug!(card = %opening, "discard pile opened");

    let state = TableState::from_parts(
        ParticipantMap::from_array([player, bot1, bot2]),
        draw_pile,
        vec![opening],
        opening.suit,
        Phase::AwaitingMove(Participant::Player),
    )?;
    if state.total_cards() != DECK_SIZE {
        return Err(Violation::CardCount {
            expected: DECK_SIZE,
            actual: state.total_cards(),
        }
        .into());
    }
    state.verify_conservation()?;
    info!(
        active_suit = %state.active_suit(),
        draw_pile = state.draw_pile_len(),
        "new table dealt"
    );
    Ok(state)
}

/// Pop the opening card, recycling eights to the bottom of the pile.
fn open_discard(draw_pile: &mut Vec<Card>) -> Result<Card, EngineError> {
    for _ in 0..draw_pile.len() {
        let card = draw_pile.pop().ok_or(Violation::NoOpeningCard)?;
        if card.rank != Rank::Eight {
            return Ok(card);
        }
        debug!(%card, "eight cannot open the discard pile, returned to bottom");
        draw_pile.insert(0, card);
    }
    Err(Violation::NoOpeningCard.into())
}
