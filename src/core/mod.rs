//! Core engine types: seats, table state, actions, errors, RNG, configuration.

pub mod participant;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use participant::{Participant, ParticipantMap, SEAT_COUNT};
pub use rng::GameRng;
pub use config::EngineConfig;
pub use action::{Action, ActionRecord};
pub use error::{EngineError, Rejection, Violation};
pub use state::{Phase, TableState};
