//! Card values: suits, ranks and identified cards.
//!
//! Suits and ranks are closed enums so suit matching is checked for
//! exhaustiveness. A `Card` pairs a face with a `CardId`; identity is by id,
//! so the three wildcard cards stay distinct even though they share a rank.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Unique card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card suit.
///
/// Declaration order is the bot's tie-break order when naming a suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits, in tie-break priority order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        };
        f.write_str(name)
    }
}

/// Card rank. `Wild` is the bomb card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Wild,
}

impl Rank {
    /// Eights and wildcards are always playable and force a suit choice.
    #[must_use]
    pub const fn changes_suit(self) -> bool {
        matches!(self, Rank::Eight | Rank::Wild)
    }

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Rank::Wild)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Wild => "Bomb",
        }
    }
}

/// A single card.
///
/// Wildcards carry a placeholder suit that never takes part in matching;
/// use [`Card::matching_suit`] when the suit matters for play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self { id, suit, rank }
    }

    /// Suit used for matching, `None` for wildcards.
    #[must_use]
    pub const fn matching_suit(&self) -> Option<Suit> {
        if self.rank.is_wild() {
            None
        } else {
            Some(self.suit)
        }
    }

    /// Does playing this card require a suit choice?
    #[must_use]
    pub const fn changes_suit(&self) -> bool {
        self.rank.changes_suit()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rank.is_wild() {
            write!(f, "{}", self.rank.label())
        } else {
            write!(f, "{}{}", self.rank.label(), self.suit.symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_changers() {
        assert!(Rank::Eight.changes_suit());
        assert!(Rank::Wild.changes_suit());
        assert!(!Rank::Seven.changes_suit());
        assert!(!Rank::King.changes_suit());
    }

    #[test]
    fn test_matching_suit_ignores_wild_placeholder() {
        let bomb = Card::new(CardId::new(1), Suit::Clubs, Rank::Wild);
        let seven = Card::new(CardId::new(2), Suit::Clubs, Rank::Seven);

        assert_eq!(bomb.matching_suit(), None);
        assert_eq!(seven.matching_suit(), Some(Suit::Clubs));
    }

    #[test]
    fn test_identity_is_by_id() {
        let a = Card::new(CardId::new(1), Suit::Hearts, Rank::Wild);
        let b = Card::new(CardId::new(2), Suit::Hearts, Rank::Wild);

        assert_ne!(a, b);
        assert_eq!((a.suit, a.rank), (b.suit, b.rank));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(CardId::new(0), Suit::Spades, Rank::Seven).to_string(), "7♠");
        assert_eq!(Card::new(CardId::new(0), Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::new(CardId::new(0), Suit::Hearts, Rank::Wild).to_string(), "Bomb");
        assert_eq!(Suit::Diamonds.to_string(), "diamonds");
    }

    #[test]
    fn test_rank_sequence_covers_wild() {
        assert_eq!(enum_iterator::all::<Rank>().count(), 14);
        assert_eq!(enum_iterator::all::<Rank>().last(), Some(Rank::Wild));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(9), Suit::Diamonds, Rank::Queen);
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"diamonds\""));
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
