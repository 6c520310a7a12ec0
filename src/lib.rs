//! inotify-raw - raw bindings to the Linux inotify syscalls
//!
//! This crate talks to the kernel's inotify facility directly by syscall
//! number, resolved per target architecture at compile time, instead of
//! going through libc's `inotify_init`/`inotify_add_watch`/
//! `inotify_rm_watch` wrappers. That keeps it usable in environments
//! whose libc predates or omits those wrappers, and keeps the surface
//! down to exactly what the kernel offers: create an instance, add or
//! update a watch, remove a watch.
//!
//! The layer is stateless. It does not read or decode the instance's
//! event stream, track watches, or close descriptors; all of that belongs
//! to the caller. Building on an architecture with no entry in the
//! syscall table is a compile error.
//!
//! # Getting Started
//!
//! ```no_run
//! fn main() -> inotify_raw::Result<()> {
//!     let fd = inotify_raw::init()?;
//!     let wd = inotify_raw::add_watch(fd, "/tmp", libc::IN_CREATE | libc::IN_DELETE)?;
//!
//!     // ... read and parse the event stream from `fd` ...
//!
//!     inotify_raw::rm_watch(fd, wd)?;
//!     unsafe { libc::close(fd) };
//!     Ok(())
//! }
//! ```

pub mod bindings;
pub mod error;
pub mod limits;
pub mod syscall;
pub mod util;

pub use bindings::{add_watch, init, rm_watch};
pub use error::{InotifyError, Result};
