//! Read-only table view for the presentation layer.
//!
//! The human player sees their own cards; bot hands are reduced to counts.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Suit};
use crate::core::{ActionRecord, Participant, ParticipantMap, Phase, TableState};
use crate::rules::{is_stalled, legal_plays};

/// What the presentation layer may show after an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    /// The human player's hand.
    pub hand: Vec<Card>,
    /// Hand sizes for every seat.
    pub hand_sizes: ParticipantMap<usize>,
    pub top_card: Card,
    pub active_suit: Suit,
    pub draw_pile_count: usize,
    pub phase: Phase,
    pub turn: Option<Participant>,
    pub winner: Option<Participant>,
    /// Cards the human may play now; empty unless it is their move.
    pub playable: Vec<CardId>,
    pub last_action: Option<ActionRecord>,
    /// Nobody can play and the draw pile is empty.
    pub stalled: bool,
    pub status: String,
}

impl TableSnapshot {
    /// Capture `state`. `notice` overrides the status line while the game
    /// is still running.
    #[must_use]
    pub fn capture(state: &TableState, notice: Option<&str>) -> Self {
        let top_card = state.top_card();
        let hand = state.hand(Participant::Player).to_vec();
        let playable = match state.phase() {
            Phase::AwaitingMove(Participant::Player) => {
                legal_plays(&hand, &top_card, state.active_suit())
                    .iter()
                    .map(|c| c.id)
                    .collect()
            }
            _ => Vec::new(),
        };
        let stalled = is_stalled(state);
        let status = status_line(state, &playable, stalled, notice);

        Self {
            hand,
            hand_sizes: state.hand_sizes(),
            top_card,
            active_suit: state.active_suit(),
            draw_pile_count: state.draw_pile_len(),
            phase: state.phase(),
            turn: state.turn(),
            winner: state.winner(),
            playable,
            last_action: state.history().last().cloned(),
            stalled,
            status,
        }
    }

    /// The human player's card with `id`, if held.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }
}

fn status_line(state: &TableState, playable: &[CardId], stalled: bool, notice: Option<&str>) -> String {
    let phase = state.phase();
    if let Some(notice) = notice.filter(|_| !phase.is_finished()) {
        return notice.to_string();
    }

    match phase {
        Phase::Setup => "Dealing...".to_string(),
        Phase::Finished {
            winner: Participant::Player,
        } => "You win!".to_string(),
        Phase::Finished { winner } => format!("{winner} wins!"),
        Phase::AwaitingSuitChoice(Participant::Player) => "Choose a suit".to_string(),
        Phase::AwaitingSuitChoice(bot) => format!("{bot} is choosing a suit"),
        Phase::AwaitingMove(Participant::Player) if stalled => {
            "Nobody can play and the draw pile is empty".to_string()
        }
        Phase::AwaitingMove(Participant::Player) if playable.is_empty() => {
            if state.draw_pile_len() == 0 {
                "No playable cards and nothing to draw: pass your turn".to_string()
            } else {
                "No playable cards: draw a card".to_string()
            }
        }
        Phase::AwaitingMove(Participant::Player) => format!(
            "Your turn: match {} or play {}",
            state.top_card(),
            state.active_suit()
        ),
        Phase::AwaitingMove(bot) => format!("{bot} is thinking..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn card(id: u32, suit: Suit, rank: Rank) -> Card {
        Card::new(CardId::new(id), suit, rank)
    }

    fn table(phase: Phase, player: Vec<Card>, draw: Vec<Card>) -> TableState {
        TableState::from_parts(
            ParticipantMap::from_array([
                player,
                vec![card(20, Suit::Clubs, Rank::Two), card(21, Suit::Clubs, Rank::Three)],
                vec![card(22, Suit::Diamonds, Rank::Two)],
            ]),
            draw,
            vec![card(1, Suit::Spades, Rank::Seven)],
            Suit::Hearts,
            phase,
        )
        .unwrap()
    }

    #[test]
    fn test_bot_hands_are_counts_only() {
        let state = table(
            Phase::AwaitingMove(Participant::Player),
            vec![card(2, Suit::Hearts, Rank::Three)],
            vec![],
        );
        let snap = TableSnapshot::capture(&state, None);

        assert_eq!(snap.hand.len(), 1);
        assert_eq!(snap.hand_sizes[Participant::Bot1], 2);
        assert_eq!(snap.hand_sizes[Participant::Bot2], 1);
        assert!(snap.card(CardId::new(20)).is_none());
    }

    #[test]
    fn test_playable_only_on_player_move() {
        let hand = vec![card(2, Suit::Hearts, Rank::Three), card(3, Suit::Clubs, Rank::Nine)];

        let snap = TableSnapshot::capture(
            &table(Phase::AwaitingMove(Participant::Player), hand.clone(), vec![]),
            None,
        );
        assert_eq!(snap.playable, vec![CardId::new(2)]);
        assert_eq!(snap.status, "Your turn: match 7♠ or play hearts");

        let snap = TableSnapshot::capture(&table(Phase::AwaitingMove(Participant::Bot1), hand, vec![]), None);
        assert!(snap.playable.is_empty());
        assert_eq!(snap.status, "Bot 1 is thinking...");
    }

    #[test]
    fn test_status_lines() {
        let nine = vec![card(3, Suit::Clubs, Rank::Nine)];

        let snap = TableSnapshot::capture(
            &table(
                Phase::AwaitingMove(Participant::Player),
                nine.clone(),
                vec![card(9, Suit::Hearts, Rank::King)],
            ),
            None,
        );
        assert_eq!(snap.status, "No playable cards: draw a card");

        let snap = TableSnapshot::capture(
            &table(Phase::AwaitingSuitChoice(Participant::Player), nine.clone(), vec![]),
            None,
        );
        assert_eq!(snap.status, "Choose a suit");

        let snap = TableSnapshot::capture(
            &table(
                Phase::Finished {
                    winner: Participant::Bot2,
                },
                nine.clone(),
                vec![],
            ),
            Some("ignored"),
        );
        assert_eq!(snap.status, "Bot 2 wins!");
        assert_eq!(snap.winner, Some(Participant::Bot2));
        assert_eq!(snap.turn, None);

        let snap = TableSnapshot::capture(
            &table(Phase::AwaitingMove(Participant::Player), nine, vec![]),
            Some("Bot 2 could not draw: the draw pile is empty"),
        );
        assert!(snap.stalled);
        assert_eq!(snap.status, "Bot 2 could not draw: the draw pile is empty");
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = table(
            Phase::AwaitingMove(Participant::Player),
            vec![card(2, Suit::Hearts, Rank::Three)],
            vec![],
        );
        let snap = TableSnapshot::capture(&state, None);

        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"drawPileCount\":0"));
        let deserialized: TableSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, deserialized);
    }
}
