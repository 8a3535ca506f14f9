//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine configuration parameters.
///
/// Table rules are fixed; only the randomness source and bot pacing are
/// configurable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for dealing. `None` seeds from OS entropy.
    /// The same seed produces the same sequence of deals.
    pub seed: Option<u64>,

    /// Bot "thinking" delay before each bot turn, in milliseconds.
    /// Only used by `Session`; the synchronous scheduler ignores it.
    pub bot_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            bot_delay_ms: 800,
        }
    }
}

impl EngineConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the bot thinking delay.
    #[must_use]
    pub fn with_bot_delay_ms(mut self, delay_ms: u64) -> Self {
        self.bot_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}
