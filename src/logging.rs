//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for
//! command output so it stays pipeable.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Install the global subscriber
///
/// `CASKR_LOG` takes standard `EnvFilter` directives; without it the level
/// is `warn`, or `debug` with `--verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "caskr=debug" } else { "caskr=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
