//! Tracing for test binaries.
//!
//! Quiet unless asked: `TEST_LOG` (or `RUST_LOG`) takes an `EnvFilter`
//! directive, e.g. `TEST_LOG=guandan_backend=debug` to follow room writes and
//! round scoring while a test runs.

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

/// Directive used when neither variable is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// `TEST_LOG` wins over `RUST_LOG`; blank values count as unset.
pub fn filter_directive(test_log: Option<&str>, rust_log: Option<&str>) -> String {
    [test_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|d| !d.is_empty())
        .unwrap_or(DEFAULT_TEST_FILTER)
        .to_string()
}

static INSTALLED: Lazy<bool> = Lazy::new(|| {
    let directive = filter_directive(
        std::env::var("TEST_LOG").ok().as_deref(),
        std::env::var("RUST_LOG").ok().as_deref(),
    );
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

    // Another subscriber may already own the process; keep it.
    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .is_ok()
});

/// Install the test subscriber once per process.
///
/// Returns whether it was this crate's subscriber that got installed.
pub fn init() -> bool {
    *INSTALLED
}
