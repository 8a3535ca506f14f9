//! Seat identification and per-seat data storage.
//!
//! ## Participant
//!
//! The three seats at the table: the human player and two bots. Turn order
//! is fixed: Player → Bot 1 → Bot 2 → Player.
//!
//! ## ParticipantMap
//!
//! Per-seat data backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Participant`.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 3;

/// A seat at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Participant {
    Player,
    Bot1,
    Bot2,
}

impl Participant {
    /// All seats in turn order.
    pub const ALL: [Participant; SEAT_COUNT] =
        [Participant::Player, Participant::Bot1, Participant::Bot2];

    /// Seat index (0-based, turn order).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Participant::Player => 0,
            Participant::Bot1 => 1,
            Participant::Bot2 => 2,
        }
    }

    /// The seat that acts after this one.
    ///
    /// ```
    /// use crazy_eights::core::Participant;
    ///
    /// assert_eq!(Participant::Player.next(), Participant::Bot1);
    /// assert_eq!(Participant::Bot2.next(), Participant::Player);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Participant::Player => Participant::Bot1,
            Participant::Bot1 => Participant::Bot2,
            Participant::Bot2 => Participant::Player,
        }
    }

    /// Is this seat computer-controlled?
    #[must_use]
    pub const fn is_bot(self) -> bool {
        !matches!(self, Participant::Player)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Player => write!(f, "You"),
            Participant::Bot1 => write!(f, "Bot 1"),
            Participant::Bot2 => write!(f, "Bot 2"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use crazy_eights::core::{Participant, ParticipantMap};
///
/// let mut sizes: ParticipantMap<usize> = ParticipantMap::with_value(8);
/// sizes[Participant::Bot1] -= 1;
///
/// assert_eq!(sizes[Participant::Player], 8);
/// assert_eq!(sizes[Participant::Bot1], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> ParticipantMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl FnMut(Participant) -> T) -> Self {
        Self {
            data: Participant::ALL.map(factory),
        }
    }

    /// Create a map from values in turn order (Player, Bot 1, Bot 2).
    pub fn from_array(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Iterate over (Participant, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Participant, &T)> {
        Participant::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by transforming every entry.
    pub fn map<U>(&self, f: impl Fn(Participant, &T) -> U) -> ParticipantMap<U> {
        ParticipantMap::new(|p| f(p, &self.data[p.index()]))
    }
}

impl<T> Index<Participant> for ParticipantMap<T> {
    type Output = T;

    fn index(&self, participant: Participant) -> &Self::Output {
        &self.data[participant.index()]
    }
}

impl<T> IndexMut<Participant> for ParticipantMap<T> {
    fn index_mut(&mut self, participant: Participant) -> &mut Self::Output {
        &mut self.data[participant.index()]
    }
}
