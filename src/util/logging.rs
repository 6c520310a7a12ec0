//! Logging utilities
//!
//! The library itself only emits `tracing` events and never installs a
//! subscriber; demos and applications opt in through [`init_logging`].

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize logging once
static INIT: Once = Once::new();

/// Initialize the tracing system
///
/// This function sets up tracing with an `EnvFilter` that:
/// - Honors the `RUST_LOG` environment variable if set
/// - Uses the `INOTIFY_RAW_DEBUG` environment variable to enable debug output
/// - Only logs warnings and errors by default
pub fn init_logging() {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env()
			.or_else(|_| {
				if std::env::var("INOTIFY_RAW_DEBUG").is_ok() {
					Ok::<EnvFilter, Box<dyn std::error::Error>>(EnvFilter::new("inotify_raw=debug"))
				} else {
					Ok::<EnvFilter, Box<dyn std::error::Error>>(EnvFilter::new("inotify_raw=warn"))
				}
			})
			.unwrap();

		tracing_subscriber::registry()
			.with(fmt::layer().with_target(true))
			.with(filter)
			.init();
	});
}
