//! Structured logging setup.
//!
//! The engine only emits `tracing` events; installing a subscriber is up to
//! the host. These helpers install a `fmt` subscriber once per process. The
//! level comes from `CRAZY_EIGHTS_LOG`, then `RUST_LOG`, then `"warn"`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    std::env::var("CRAZY_EIGHTS_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr. Idempotent; does nothing if another subscriber is set.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    });
}

/// Log through the test harness so output is captured per test.
pub fn init_for_tests() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(filter())
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
