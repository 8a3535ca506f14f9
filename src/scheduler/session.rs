//! Async session driving bot turns on a timer.
//!
//! Human actions are applied immediately. When one leaves a bot to act, a
//! driver task sleeps for the configured delay and then takes a single bot
//! turn, repeating until the human is due again. At most one driver runs per
//! game. Each game has a generation number and a cancellation token; starting
//! a new game cancels the token so pending bot turns from the old game never
//! land on the new table.
//!
//! Bot seats only move through the driver; moves submitted for them are
//! refused. Snapshots are published on a `watch` channel after every change.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use super::snapshot::TableSnapshot;
use super::turn::TurnScheduler;
use crate::bots::{BotPolicy, SuitCounterBot};
use crate::cards::{CardId, Suit};
use crate::core::{EngineConfig, EngineError, Participant, Rejection};

struct Inner<P: BotPolicy> {
    scheduler: TurnScheduler<P>,
    generation: u64,
    cancel: CancellationToken,
    /// A driver task is running for the current generation.
    driver_pending: bool,
}

struct Shared<P: BotPolicy> {
    inner: Mutex<Inner<P>>,
    snapshots: watch::Sender<TableSnapshot>,
}

/// A game table shared between the presentation layer and the bot driver.
///
/// Cheap to clone; clones refer to the same table. Operations that hand the
/// turn to a bot spawn onto the current Tokio runtime and panic outside one.
pub struct Session<P: BotPolicy + 'static = SuitCounterBot> {
    shared: Arc<Shared<P>>,
}

impl<P: BotPolicy + 'static> Clone for Session<P> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Session<SuitCounterBot> {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_policy(config, SuitCounterBot)
    }
}

impl<P: BotPolicy + 'static> Session<P> {
    pub fn with_policy(config: EngineConfig, policy: P) -> Result<Self, EngineError> {
        Ok(Self::from_scheduler(TurnScheduler::with_policy(config, policy)?))
    }

    /// Wrap an existing scheduler. Bots already due are not started until
    /// the next action; call `resume_bots` to start them right away.
    #[must_use]
    pub fn from_scheduler(scheduler: TurnScheduler<P>) -> Self {
        let (snapshots, _) = watch::channel(scheduler.snapshot());
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    scheduler,
                    generation: 0,
                    cancel: CancellationToken::new(),
                    driver_pending: false,
                }),
                snapshots,
            }),
        }
    }

    /// Receive a snapshot after every change to the table.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TableSnapshot> {
        self.shared.snapshots.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        self.shared.inner.lock().scheduler.snapshot()
    }

    /// Current game generation; bumped by every `new_game`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.shared.inner.lock().generation
    }

    /// Abandon the current game, cancelling any pending bot turn.
    pub fn new_game(&self) -> Result<TableSnapshot, EngineError> {
        let mut inner = self.shared.inner.lock();
        inner.cancel.cancel();
        inner.cancel = CancellationToken::new();
        inner.generation += 1;
        inner.driver_pending = false;
        debug!(generation = inner.generation, "session reset");

        let result = inner.scheduler.new_game();
        self.after_action(&mut inner, result)
    }

    /// Play a card for the human seat. Bot seats are refused.
    pub fn play_card(&self, participant: Participant, card: CardId) -> Result<TableSnapshot, EngineError> {
        let mut inner = self.shared.inner.lock();
        let result = if participant.is_bot() {
            Err(inner.scheduler.refuse(Rejection::BotSeat { participant }))
        } else {
            inner.scheduler.play_card(participant, card)
        };
        self.after_action(&mut inner, result)
    }

    /// Name the suit after the human seat's eight or bomb.
    pub fn choose_suit(&self, suit: Suit) -> Result<TableSnapshot, EngineError> {
        let mut inner = self.shared.inner.lock();
        let turn = inner.scheduler.table().turn();
        let result = match turn {
            Some(participant) if participant.is_bot() => {
                Err(inner.scheduler.refuse(Rejection::BotSeat { participant }))
            }
            _ => inner.scheduler.choose_suit(suit),
        };
        self.after_action(&mut inner, result)
    }

    /// Draw for the human seat. Bot seats are refused.
    pub fn draw_card(&self, participant: Participant) -> Result<TableSnapshot, EngineError> {
        let mut inner = self.shared.inner.lock();
        let result = if participant.is_bot() {
            Err(inner.scheduler.refuse(Rejection::BotSeat { participant }))
        } else {
            inner.scheduler.draw_card(participant)
        };
        self.after_action(&mut inner, result)
    }

    /// Start the bot driver if a bot is due and none is running.
    pub fn resume_bots(&self) {
        let mut inner = self.shared.inner.lock();
        self.ensure_driver(&mut inner);
    }

    /// Publish the outcome and hand over to the bot driver when a bot is due.
    ///
    /// Rejections also publish, since they change the status line.
    fn after_action(
        &self,
        inner: &mut Inner<P>,
        result: Result<TableSnapshot, EngineError>,
    ) -> Result<TableSnapshot, EngineError> {
        self.shared.snapshots.send_replace(inner.scheduler.snapshot());
        let snapshot = result?;
        self.ensure_driver(inner);
        Ok(snapshot)
    }

    fn ensure_driver(&self, inner: &mut Inner<P>) {
        if inner.driver_pending || inner.scheduler.pending_bot().is_none() {
            return;
        }
        inner.driver_pending = true;
        self.spawn_driver(
            inner.generation,
            inner.cancel.clone(),
            inner.scheduler.config().bot_delay(),
        );
    }

    fn spawn_driver(&self, generation: u64, cancel: CancellationToken, delay: Duration) {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = cancel.cancelled() => {
                        debug!(generation, "bot turn cancelled");
                        return;
                    }
                    () = tokio::time::sleep(delay) => {}
                }
                if !step_once(&shared, generation, &cancel) {
                    return;
                }
            }
        });
    }
}

/// Take one bot turn for `generation`. Returns whether the driver should
/// keep going.
///
/// A move refused by the configured policy is replaced by the default
/// policy's move, so the game never waits on a bot forever.
fn step_once<P: BotPolicy>(shared: &Shared<P>, generation: u64, cancel: &CancellationToken) -> bool {
    let mut inner = shared.inner.lock();
    if inner.generation != generation || cancel.is_cancelled() {
        debug!(generation, "stale bot turn dropped");
        return false;
    }

    let stepped = match inner.scheduler.step_bot() {
        Err(err) if !err.is_fatal() => {
            warn!(%err, "bot policy move refused, using the default policy");
            inner.scheduler.step_bot_fallback()
        }
        other => other,
    };
    shared.snapshots.send_replace(inner.scheduler.snapshot());

    let more = match stepped {
        Ok(Some(_)) => inner.scheduler.pending_bot().is_some(),
        Ok(None) => false,
        Err(err) => {
            error!(%err, "bot turn failed");
            false
        }
    };
    if !more {
        inner.driver_pending = false;
    }
    more
}
