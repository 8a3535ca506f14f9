//! Turn scheduling: who acts next, bot turns, and what the table looks like.
//!
//! - `turn`: synchronous `TurnScheduler`, the single writer of the table
//! - `session`: async wrapper that plays bot turns after a delay
//! - `snapshot`: the read-only `TableSnapshot` handed to the presentation layer

pub mod session;
pub mod snapshot;
pub mod turn;

pub use session::Session;
pub use snapshot::TableSnapshot;
pub use turn::TurnScheduler;
