//! The three inotify kernel calls
//!
//! Each operation is a stateless forward to the kernel: marshal the
//! arguments, issue the call with the number resolved for this build's
//! architecture, and translate a negative result into [`InotifyError`].
//! The layer tracks nothing between calls; instance and watch lifetimes
//! are entirely the caller's concern, and the kernel serializes concurrent
//! calls against the same instance itself.

use crate::error::{InotifyError, Result};
use crate::syscall::nr;
use libc::c_long;
use nix::errno::Errno;
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::io::RawFd;
use std::path::Path;
use tracing::trace;

/// Create a new inotify instance
///
/// Returns the instance's file descriptor. The descriptor is owned by the
/// caller, who is responsible for reading its event stream and eventually
/// closing it; this layer never closes it.
///
/// # Errors
///
/// Returns [`InotifyError::Kernel`] when the kernel rejects the call, for
/// example when the per-user instance limit (`max_user_instances`) is
/// exhausted (`EMFILE`).
pub fn init() -> Result<RawFd> {
	#[cfg(not(any(
		target_arch = "aarch64",
		target_arch = "riscv32",
		target_arch = "riscv64",
		target_arch = "loongarch64"
	)))]
	let res = unsafe { crate::syscall::syscall0(nr::INOTIFY_INIT) };

	// Generic-ABI targets only carry inotify_init1; zero flags gives the
	// same semantics as plain inotify_init.
	#[cfg(any(
		target_arch = "aarch64",
		target_arch = "riscv32",
		target_arch = "riscv64",
		target_arch = "loongarch64"
	))]
	let res = unsafe { crate::syscall::syscall1(nr::INOTIFY_INIT1, 0) };

	if res < 0 {
		return Err(InotifyError::Kernel(Errno::from_raw(-res as i32)));
	}
	trace!(fd = res, "created inotify instance");
	Ok(res as RawFd)
}

/// Register a watch, or update an existing one
///
/// Registers interest in `mask` events for `path` on the instance `fd`
/// and returns the watch descriptor. The mask is forwarded to the kernel
/// verbatim; its bits (`libc::IN_*`) are never interpreted here. Watching
/// a path that already has a watch on this instance follows kernel
/// policy: with `IN_MASK_ADD` set the existing mask is augmented and the
/// same descriptor comes back, otherwise the mask is replaced.
///
/// # Errors
///
/// Returns [`InotifyError::Path`] if `path` contains an interior NUL byte
/// (detected before any kernel call), or [`InotifyError::Kernel`] when
/// the kernel rejects the call (`EBADF` for a dead instance, `ENOENT` for
/// an unresolvable path, `ENOSPC` when the watch limit is exhausted,
/// `EINVAL` for bad mask bits).
pub fn add_watch<P: AsRef<Path>>(fd: RawFd, path: P, mask: u32) -> Result<u32> {
	let path = CString::new(path.as_ref().as_os_str().as_bytes())?;
	let res = unsafe {
		crate::syscall::syscall3(
			nr::INOTIFY_ADD_WATCH,
			c_long::from(fd),
			path.as_ptr() as c_long,
			mask as c_long,
		)
	};
	if res < 0 {
		return Err(InotifyError::Kernel(Errno::from_raw(-res as i32)));
	}
	trace!(fd, wd = res, mask, path = %path.to_string_lossy(), "added watch");
	Ok(res as u32)
}

/// Remove a watch from an instance
///
/// Takes a watch descriptor previously returned by [`add_watch`] on the
/// same instance and returns the kernel's status (zero on success). After
/// success the descriptor is invalid and the kernel queues an
/// `IN_IGNORED` event on the instance's stream; delivery of that event is
/// the stream reader's business, not this layer's.
///
/// # Errors
///
/// Returns [`InotifyError::Kernel`] when the kernel rejects the call
/// (`EINVAL` for an already-removed or fabricated descriptor, `EBADF` for
/// a closed instance).
pub fn rm_watch(fd: RawFd, wd: u32) -> Result<i32> {
	let res = unsafe {
		crate::syscall::syscall2(nr::INOTIFY_RM_WATCH, c_long::from(fd), wd as c_long)
	};
	if res < 0 {
		return Err(InotifyError::Kernel(Errno::from_raw(-res as i32)));
	}
	trace!(fd, wd, "removed watch");
	Ok(res as i32)
}
