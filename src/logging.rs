//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the filter passed in (normally the one
//! stored in settings). Initializing twice is harmless: the second call keeps
//! the subscriber that is already installed.

use crate::settings::Settings;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global fmt subscriber. Returns false if one was already set.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

/// Install the subscriber with the filter stored in settings.
pub fn init_from(settings: &Settings) -> bool {
    init(&settings.log_filter)
}
