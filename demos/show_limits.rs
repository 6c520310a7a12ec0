//! Print the kernel's current inotify limits.
//!
//! Run it with:
//! ```bash
//! cargo run --example show_limits
//! ```

use inotify_raw::limits::{Limit, value};

fn main() -> std::io::Result<()> {
	for (name, limit) in [
		("max_user_instances", Limit::MaxUserInstances),
		("max_user_watches", Limit::MaxUserWatches),
		("max_queued_events", Limit::MaxQueuedEvents),
	] {
		println!("{name:20} {}", value(limit)?);
	}
	Ok(())
}
