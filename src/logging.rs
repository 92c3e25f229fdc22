//! Tracing setup
//!
//! Logs go to stderr so report output on stdout can be piped cleanly.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a filter that overrides the configured one
pub const LOG_ENV: &str = "KAKEIBO_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once
///
/// `default_filter` is used when `KAKEIBO_LOG` is unset or unparsable.
/// Later calls are ignored.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("kakeibo=warn"));

        match fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
        {
            Ok(()) => tracing::debug!("tracing initialized"),
            // A host process or test harness already set the global subscriber
            Err(err) => tracing::debug!(%err, "keeping existing tracing subscriber"),
        }
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init_tracing("kakeibo=debug");
        super::init_tracing("not a [valid filter");
    }

    #[test]
    fn init_keeps_a_subscriber_installed_elsewhere() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        super::init_tracing("kakeibo=info");
        tracing::info!("still logging");
    }
}
