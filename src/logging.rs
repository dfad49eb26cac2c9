//! Opt-in tracing setup for hosts that do not configure their own subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_DEV_LOG: &str = "COVERAGE_DEV_LOG";
pub const ENV_LOG_JSON: &str = "COVERAGE_LOG_JSON";
const DEFAULT_FILTER: &str = "coverage=info,warn";

/// Load `.env`, then install a subscriber when `COVERAGE_DEV_LOG=1`.
///
/// Format is compact text, or JSON lines with `COVERAGE_LOG_JSON=1`.
/// The filter comes from `RUST_LOG`, defaulting to `coverage=info,warn`.
/// Returns `true` if this call installed the global subscriber; a second call
/// (or a host that already installed one) is a no-op returning `false`.
pub fn init_from_env() -> bool {
    // Load .env in local/dev; no-op when the file is missing.
    let _ = dotenvy::dotenv();

    if !env_flag(ENV_DEV_LOG) {
        return false;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if env_flag(ENV_LOG_JSON) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
            .is_ok()
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).ok().is_some_and(|v| v.trim() == "1")
}
