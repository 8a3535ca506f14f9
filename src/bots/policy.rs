//! Bot decision policies.
//!
//! Policies are trait-based so the scheduler can be driven by other
//! strategies; `SuitCounterBot` is the default.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Suit};
use crate::core::{Participant, TableState};
use crate::rules::legal_plays;

/// What a bot sees on its turn: its own hand and the public table.
#[derive(Clone, Debug)]
pub struct BotView<'a> {
    pub seat: Participant,
    pub hand: &'a [Card],
    pub top: Card,
    pub active_suit: Suit,
    pub draw_pile_len: usize,
}

impl<'a> BotView<'a> {
    /// The view of `seat` at `state`.
    #[must_use]
    pub fn new(state: &'a TableState, seat: Participant) -> Self {
        Self {
            seat,
            hand: state.hand(seat),
            top: state.top_card(),
            active_suit: state.active_suit(),
            draw_pile_len: state.draw_pile_len(),
        }
    }
}

/// A complete bot turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BotMove {
    /// Play a card; `suit` is set when the card is an eight or a bomb.
    Play { card: CardId, suit: Option<Suit> },
    Draw,
}

/// Policy for choosing a bot's move.
pub trait BotPolicy: Send + Sync {
    /// Choose a move. Must only play cards that are legal in `view`.
    fn choose_move(&self, view: &BotView<'_>) -> BotMove;

    /// Choose a suit after a suit-changing play, given the remaining hand.
    fn choose_suit(&self, remaining: &[Card]) -> Suit;
}

/// Default policy.
///
/// Plays the first legal ordinary card, holding eights and bombs back until
/// nothing else fits. After a suit-changer it names its most common
/// remaining suit.
#[derive(Clone, Debug, Default)]
pub struct SuitCounterBot;

impl BotPolicy for SuitCounterBot {
    fn choose_move(&self, view: &BotView<'_>) -> BotMove {
        let legal = legal_plays(view.hand, &view.top, view.active_suit);

        let Some(card) = legal
            .iter()
            .find(|c| !c.changes_suit())
            .or_else(|| legal.first())
            .copied()
        else {
            return BotMove::Draw;
        };

        let suit = card.changes_suit().then(|| {
            let remaining: Vec<Card> = view
                .hand
                .iter()
                .filter(|c| c.id != card.id)
                .copied()
                .collect();
            self.choose_suit(&remaining)
        });

        BotMove::Play { card: card.id, suit }
    }

    fn choose_suit(&self, remaining: &[Card]) -> Suit {
        most_common_suit(remaining).unwrap_or(Suit::Spades)
    }
}

/// The suit held most often, ignoring bombs.
///
/// Ties go to the suit listed first in `Suit::ALL`. `None` when no card has
/// a real suit.
#[must_use]
pub fn most_common_suit(cards: &[Card]) -> Option<Suit> {
    let mut counts = [0usize; 4];
    for suit in cards.iter().filter_map(Card::matching_suit) {
        counts[suit as usize] += 1;
    }

    Suit::ALL
        .iter()
        .zip(counts)
        .filter(|(_, n)| *n > 0)
        .fold(None, |best: Option<(Suit, usize)>, (&suit, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((suit, n)),
        })
        .map(|(suit, _)| suit)
}
