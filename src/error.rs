//! Error types for the binding layer
//!
//! This module contains the error type and a result type for the three
//! inotify operations.

use nix::errno::Errno;
use std::ffi::NulError;
use thiserror::Error;

/// Result type for inotify binding operations
pub type Result<T> = std::result::Result<T, InotifyError>;

/// Error type for inotify binding operations
///
/// Kernel failures carry the OS error code and nothing else; this layer
/// never classifies them further. Retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum InotifyError {
	/// The kernel call returned an error
	#[error("inotify kernel call failed: {0}")]
	Kernel(#[source] Errno),

	/// The watch path contains an interior NUL byte and cannot be passed
	/// across the native boundary
	#[error("watch path contains an interior NUL byte")]
	Path(#[from] NulError),
}

impl InotifyError {
	/// The raw OS error code, if this failure came from the kernel
	#[must_use]
	pub fn raw_os_error(&self) -> Option<i32> {
		match self {
			Self::Kernel(errno) => Some(*errno as i32),
			Self::Path(_) => None,
		}
	}
}
