//! Bot behavior through the scheduler, including custom policies.

use std::sync::atomic::{AtomicUsize, Ordering};

use crazy_eights::bots::{most_common_suit, BotMove, BotPolicy, BotView, SuitCounterBot};
use crazy_eights::cards::{Card, CardId, Rank, Suit};
use crazy_eights::core::{EngineConfig, Participant, ParticipantMap, Phase, Rejection, TableState};
use crazy_eights::{logging, TurnScheduler};

fn card(id: u32, suit: Suit, rank: Rank) -> Card {
    Card::new(CardId::new(id), suit, rank)
}

/// Bot 1 to move on 7♠ with hearts active.
fn bot_table(bot1: Vec<Card>, draw: Vec<Card>) -> TableState {
    TableState::from_parts(
        ParticipantMap::from_array([
            vec![card(2, Suit::Clubs, Rank::Two), card(3, Suit::Clubs, Rank::Three)],
            bot1,
            vec![card(4, Suit::Diamonds, Rank::Four), card(5, Suit::Diamonds, Rank::Five)],
        ]),
        draw,
        vec![card(1, Suit::Spades, Rank::Seven)],
        Suit::Hearts,
        Phase::AwaitingMove(Participant::Bot1),
    )
    .unwrap()
}

/// Always draws and names clubs, counting how often it is asked.
#[derive(Default)]
struct AlwaysDraw {
    moves: AtomicUsize,
}

impl BotPolicy for AlwaysDraw {
    fn choose_move(&self, _view: &BotView<'_>) -> BotMove {
        self.moves.fetch_add(1, Ordering::Relaxed);
        BotMove::Draw
    }

    fn choose_suit(&self, _remaining: &[Card]) -> Suit {
        Suit::Clubs
    }
}

/// Plays its first card without checking legality; never names a suit.
struct Reckless;

impl BotPolicy for Reckless {
    fn choose_move(&self, view: &BotView<'_>) -> BotMove {
        match view.hand.first() {
            Some(c) => BotMove::Play { card: c.id, suit: None },
            None => BotMove::Draw,
        }
    }

    fn choose_suit(&self, _remaining: &[Card]) -> Suit {
        Suit::Clubs
    }
}

#[test]
fn test_default_bot_plays_ordinary_card_before_eight() {
    logging::init_for_tests();

    let table = bot_table(
        vec![card(10, Suit::Clubs, Rank::Eight), card(11, Suit::Hearts, Rank::Ace)],
        vec![],
    );
    let mut sched = TurnScheduler::from_table(EngineConfig::default(), SuitCounterBot, table).unwrap();

    sched.step_bot().unwrap();
    assert_eq!(sched.table().top_card().id, CardId::new(11));
    assert_eq!(sched.table().turn(), Some(Participant::Bot2));
}

#[test]
fn test_default_bot_names_suit_in_same_step() {
    logging::init_for_tests();

    let table = bot_table(
        vec![
            card(10, Suit::Clubs, Rank::Eight),
            card(11, Suit::Diamonds, Rank::Ace),
            card(12, Suit::Diamonds, Rank::Two),
            card(13, Suit::Spades, Rank::Two),
        ],
        vec![],
    );
    let mut sched = TurnScheduler::from_table(EngineConfig::default(), SuitCounterBot, table).unwrap();

    assert_eq!(sched.step_bot().unwrap(), Some(Participant::Bot1));
    let table = sched.table();
    assert_eq!(table.top_card().id, CardId::new(10));
    assert_eq!(table.active_suit(), Suit::Diamonds);
    assert_eq!(table.phase(), Phase::AwaitingMove(Participant::Bot2));
}

#[test]
fn test_bomb_as_last_card_wins_without_suit_choice() {
    logging::init_for_tests();

    let table = bot_table(vec![card(10, Suit::Hearts, Rank::Wild)], vec![]);
    let mut sched = TurnScheduler::from_table(EngineConfig::default(), SuitCounterBot, table).unwrap();

    sched.step_bot().unwrap();
    let snap = sched.snapshot();
    assert_eq!(snap.winner, Some(Participant::Bot1));
    assert_eq!(snap.status, "Bot 1 wins!");
    assert_eq!(sched.step_bot().unwrap(), None);
}

#[test]
fn test_custom_policy_draw_rejected_when_holding_playable() {
    logging::init_for_tests();

    let table = bot_table(vec![card(10, Suit::Hearts, Rank::Ace)], vec![card(20, Suit::Spades, Rank::King)]);
    let mut sched = TurnScheduler::from_table(EngineConfig::default(), AlwaysDraw::default(), table).unwrap();
    let before = sched.table().clone();

    let err = sched.step_bot().unwrap_err();
    assert_eq!(
        err.rejection(),
        Some(Rejection::HasPlayableCard {
            participant: Participant::Bot1
        })
    );
    assert_eq!(sched.table(), &before);
    assert_eq!(sched.policy().moves.load(Ordering::Relaxed), 1);
}

#[test]
fn test_custom_policy_draw_accepted_without_playable() {
    logging::init_for_tests();

    let table = bot_table(vec![card(10, Suit::Clubs, Rank::Ace)], vec![card(20, Suit::Spades, Rank::King)]);
    let mut sched = TurnScheduler::from_table(EngineConfig::default(), AlwaysDraw::default(), table).unwrap();

    sched.step_bot().unwrap();
    assert_eq!(sched.table().hand(Participant::Bot1).len(), 2);
    assert_eq!(sched.table().draw_pile_len(), 0);
}

#[test]
fn test_illegal_bot_play_is_rejected_like_a_human_one() {
    logging::init_for_tests();

    let table = bot_table(
        vec![card(10, Suit::Clubs, Rank::Ace), card(11, Suit::Hearts, Rank::Two)],
        vec![],
    );
    let mut sched = TurnScheduler::from_table(EngineConfig::default(), Reckless, table).unwrap();
    let before = sched.table().clone();

    let err = sched.step_bot().unwrap_err();
    assert!(matches!(err.rejection(), Some(Rejection::NotPlayable { .. })));
    assert_eq!(sched.table(), &before);
}

#[test]
fn test_missing_suit_falls_back_to_policy_choice() {
    logging::init_for_tests();

    let table = bot_table(
        vec![card(10, Suit::Spades, Rank::Eight), card(11, Suit::Hearts, Rank::Two)],
        vec![],
    );
    let mut sched = TurnScheduler::from_table(EngineConfig::default(), Reckless, table).unwrap();

    sched.step_bot().unwrap();
    assert_eq!(sched.table().active_suit(), Suit::Clubs);
    assert_eq!(sched.table().turn(), Some(Participant::Bot2));
}

#[test]
fn test_bot_view_exposes_only_own_hand() {
    let table = bot_table(vec![card(10, Suit::Clubs, Rank::Ace)], vec![card(20, Suit::Spades, Rank::King)]);
    let view = BotView::new(&table, Participant::Bot1);

    assert_eq!(view.seat, Participant::Bot1);
    assert_eq!(view.hand, table.hand(Participant::Bot1));
    assert_eq!(view.top, table.top_card());
    assert_eq!(view.active_suit, Suit::Hearts);
    assert_eq!(view.draw_pile_len, 1);
}

#[test]
fn test_most_common_suit_ignores_bombs() {
    let hand = [
        card(1, Suit::Hearts, Rank::Wild),
        card(2, Suit::Hearts, Rank::Wild),
        card(3, Suit::Clubs, Rank::Four),
    ];
    assert_eq!(most_common_suit(&hand), Some(Suit::Clubs));
}
