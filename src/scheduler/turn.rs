//! Synchronous turn scheduler.
//!
//! Owns the table, the deal RNG and the bot policy. Every operation runs
//! against a clone of the table and is committed only after the card
//! conservation check passes, so a failed operation leaves the table
//! exactly as it was.

use tracing::{debug, error, info, warn};

use super::snapshot::TableSnapshot;
use crate::bots::{BotMove, BotPolicy, BotView, SuitCounterBot};
use crate::cards::{CardId, Suit};
use crate::core::{EngineConfig, EngineError, GameRng, Participant, Phase, Rejection, TableState};
use crate::rules::{self, DrawOutcome, PlayOutcome};

/// Drives one table through its turn cycle.
///
/// Human moves come in through `play_card`, `choose_suit` and `draw_card`;
/// bot turns are taken by `step_bot` using the policy `P`. Every seat goes
/// through the same rules, and the last rejection or skip is kept as a
/// notice for the next snapshot.
pub struct TurnScheduler<P: BotPolicy = SuitCounterBot> {
    config: EngineConfig,
    rng: GameRng,
    policy: P,
    table: TableState,
    notice: Option<String>,
}

impl TurnScheduler<SuitCounterBot> {
    /// Deal a first game with the default bot policy.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_policy(config, SuitCounterBot)
    }
}

impl<P: BotPolicy> TurnScheduler<P> {
    /// Deal a first game with a custom bot policy.
    pub fn with_policy(config: EngineConfig, policy: P) -> Result<Self, EngineError> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let table = rules::deal(&mut rng.fork())?;
        info!(seed = rng.seed(), "scheduler created");
        Ok(Self {
            config,
            rng,
            policy,
            table,
            notice: None,
        })
    }

    /// Resume from an existing table.
    pub fn from_table(config: EngineConfig, policy: P, table: TableState) -> Result<Self, EngineError> {
        table.verify_conservation()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            config,
            rng,
            policy,
            table,
            notice: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &TableState {
        &self.table
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(&self.table, self.notice.as_deref())
    }

    /// Discard the current game and deal a new one with fresh card ids.
    ///
    /// The deal RNG keeps advancing, so a seeded scheduler produces the same
    /// sequence of games but never the same game twice.
    pub fn new_game(&mut self) -> Result<TableSnapshot, EngineError> {
        let table = rules::deal(&mut self.rng.fork())?;
        self.table = table;
        self.notice = None;
        info!("new game started");
        Ok(self.snapshot())
    }

    /// Play a card from `participant`'s hand.
    pub fn play_card(
        &mut self,
        participant: Participant,
        card: CardId,
    ) -> Result<TableSnapshot, EngineError> {
        let result = transact(&mut self.table, |table| {
            rules::apply_play(table, participant, card)
        });
        self.settle(result.map(|_| None))
    }

    /// Name the active suit after an eight or a bomb.
    pub fn choose_suit(&mut self, suit: Suit) -> Result<TableSnapshot, EngineError> {
        let result = transact(&mut self.table, |table| rules::choose_suit(table, suit));
        self.settle(result.map(|_| None))
    }

    /// Draw a card for `participant`, or skip their turn when the pile is empty.
    pub fn draw_card(&mut self, participant: Participant) -> Result<TableSnapshot, EngineError> {
        let result = transact(&mut self.table, |table| rules::apply_draw(table, participant));
        self.settle(result.map(|outcome| skip_notice(participant, outcome)))
    }

    /// The bot that has to act next, if any.
    #[must_use]
    pub fn pending_bot(&self) -> Option<Participant> {
        self.table.turn().filter(|p| p.is_bot())
    }

    /// Take one complete turn for the pending bot.
    ///
    /// Returns the seat that acted, or `None` when no bot is due.
    pub fn step_bot(&mut self) -> Result<Option<Participant>, EngineError> {
        let Some(seat) = self.pending_bot() else {
            return Ok(None);
        };

        let policy = &self.policy;
        let result = transact(&mut self.table, |table| take_bot_turn(table, seat, policy));
        self.settle(result)?;
        debug!(%seat, "bot turn complete");
        Ok(Some(seat))
    }

    /// Take one turn for the pending bot with `SuitCounterBot`, whatever the
    /// configured policy. Used when the configured policy's move is refused.
    pub fn step_bot_fallback(&mut self) -> Result<Option<Participant>, EngineError> {
        let Some(seat) = self.pending_bot() else {
            return Ok(None);
        };

        let result = transact(&mut self.table, |table| take_bot_turn(table, seat, &SuitCounterBot));
        self.settle(result)?;
        info!(%seat, "bot turn taken by the default policy");
        Ok(Some(seat))
    }

    /// Run bot turns until the human player is due or the game ends.
    pub fn run_bots(&mut self) -> Result<TableSnapshot, EngineError> {
        while self.step_bot()?.is_some() {}
        Ok(self.snapshot())
    }

    /// Record `rejection` as the current notice without touching the table.
    pub(crate) fn refuse(&mut self, rejection: Rejection) -> EngineError {
        let err = EngineError::from(rejection);
        self.report(&err);
        err
    }

    fn settle(&mut self, result: Result<Option<String>, EngineError>) -> Result<TableSnapshot, EngineError> {
        match result {
            Ok(notice) => {
                self.notice = notice;
                Ok(self.snapshot())
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    fn report(&mut self, err: &EngineError) {
        match err.rejection() {
            Some(rejection) => {
                warn!(%rejection, "move rejected");
                self.notice = Some(format!("Not allowed: {rejection}"));
            }
            None => {
                error!(%err, "table invariant broken, start a new game");
                self.notice = Some(err.to_string());
            }
        }
    }
}

/// One complete bot turn for `seat` on `table`, as chosen by `policy`.
///
/// A pending suit choice is finished first; otherwise the bot plays or
/// draws, naming a suit in the same step when its card needs one.
fn take_bot_turn<Q: BotPolicy>(
    table: &mut TableState,
    seat: Participant,
    policy: &Q,
) -> Result<Option<String>, EngineError> {
    if let Phase::AwaitingSuitChoice(_) = table.phase() {
        let suit = policy.choose_suit(table.hand(seat));
        rules::choose_suit(table, suit)?;
        return Ok(None);
    }

    match policy.choose_move(&BotView::new(table, seat)) {
        BotMove::Draw => {
            let outcome = rules::apply_draw(table, seat)?;
            Ok(skip_notice(seat, outcome))
        }
        BotMove::Play { card, suit } => {
            if rules::apply_play(table, seat, card)? == PlayOutcome::SuitChoiceRequired {
                let suit = suit.unwrap_or_else(|| policy.choose_suit(table.hand(seat)));
                rules::choose_suit(table, suit)?;
            }
            Ok(None)
        }
    }
}

/// Apply `op` to a copy of `table`, committing only if it succeeds and every
/// card is still accounted for.
fn transact<T>(
    table: &mut TableState,
    op: impl FnOnce(&mut TableState) -> Result<T, EngineError>,
) -> Result<T, EngineError> {
    let mut next = table.clone();
    let value = op(&mut next)?;
    next.verify_conservation()?;
    *table = next;
    Ok(value)
}

fn skip_notice(participant: Participant, outcome: DrawOutcome) -> Option<String> {
    match outcome {
        DrawOutcome::Drew(_) => None,
        DrawOutcome::Skipped => Some(format!(
            "{participant} could not draw: the draw pile is empty"
        )),
    }
}
