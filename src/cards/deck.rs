//! Deck construction and shuffling.

use std::sync::atomic::{AtomicU32, Ordering};

use enum_iterator::all;

use super::card::{Card, CardId, Rank, Suit};
use crate::core::GameRng;

/// Number of wildcard (bomb) cards in a deck.
pub const WILDCARD_COUNT: usize = 3;

/// Total cards in a deck: 52 standard cards plus the wildcards.
pub const DECK_SIZE: usize = 52 + WILDCARD_COUNT;

/// Process-wide id source; ids are never reused, even across games.
static NEXT_CARD_ID: AtomicU32 = AtomicU32::new(1);

fn alloc_card_ids(count: usize) -> impl Iterator<Item = CardId> {
    let first = NEXT_CARD_ID.fetch_add(count as u32, Ordering::Relaxed);
    (first..first + count as u32).map(CardId)
}

/// Build a full deck in canonical order with fresh card ids.
///
/// One card per (suit, rank) for the 13 standard ranks, followed by
/// `WILDCARD_COUNT` wildcards whose placeholder suits cycle through
/// `Suit::ALL`.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let faces = all::<Suit>()
        .flat_map(|suit| {
            all::<Rank>()
                .filter(|rank| !rank.is_wild())
                .map(move |rank| (suit, rank))
        })
        .chain((0..WILDCARD_COUNT).map(|i| (Suit::ALL[i % Suit::ALL.len()], Rank::Wild)));

    faces
        .zip(alloc_card_ids(DECK_SIZE))
        .map(|((suit, rank), id)| Card::new(id, suit, rank))
        .collect()
}

/// Return a uniformly random permutation of `cards`.
///
/// The input is left untouched.
#[must_use]
pub fn shuffle(cards: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}
