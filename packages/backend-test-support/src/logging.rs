//! Test logging, installed once per test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_TEST_FILTER: &str = "warn";

/// Install a subscriber that writes through the test harness so output is
/// captured per test.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`. Setting `TEST_LOG_JSON=1`
/// switches to the JSON shape the server emits, which helps when checking
/// `request_completed` fields. Safe to call from every test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        let builder = fmt().with_env_filter(filter).with_test_writer();
        // Another subscriber may already be installed; keep it
        if std::env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1") {
            builder.json().try_init().ok();
        } else {
            builder.without_time().try_init().ok();
        }
    });
}
