//! Kernel inotify limits
//!
//! The kernel bounds inotify usage per real user ID and exposes the knobs
//! through procfs. Callers that hit `EMFILE` on [`crate::init`] or
//! `ENOSPC` on [`crate::add_watch`] can read these to report something
//! actionable, or raise them when running privileged.

use std::fs;
use std::io;

/// Tunable inotify parameters under `/proc/sys/fs/inotify`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
	/// Maximum number of inotify instances per real user ID
	MaxUserInstances,
	/// Maximum number of watches per real user ID
	MaxUserWatches,
	/// Maximum number of events queued on an instance before overflow
	MaxQueuedEvents,
}

impl Limit {
	const fn path(self) -> &'static str {
		match self {
			Self::MaxUserInstances => "/proc/sys/fs/inotify/max_user_instances",
			Self::MaxUserWatches => "/proc/sys/fs/inotify/max_user_watches",
			Self::MaxQueuedEvents => "/proc/sys/fs/inotify/max_queued_events",
		}
	}
}

/// Read the current value of a limit
///
/// # Errors
///
/// Fails if procfs is not mounted or the file is unreadable.
pub fn value(limit: Limit) -> io::Result<u64> {
	let raw = fs::read_to_string(limit.path())?;
	raw.trim()
		.parse()
		.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Set a limit
///
/// Writing these files requires privileges; unprivileged callers get
/// `EACCES`.
///
/// # Errors
///
/// Fails if procfs is not mounted or the caller may not write the file.
pub fn set_value(limit: Limit, value: u64) -> io::Result<()> {
	fs::write(limit.path(), value.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn limits_are_readable_and_sane() {
		for limit in [Limit::MaxUserInstances, Limit::MaxUserWatches, Limit::MaxQueuedEvents] {
			let v = value(limit).expect("procfs should expose inotify limits");
			assert!(v > 0, "{limit:?} reads as zero");
		}
	}
}
