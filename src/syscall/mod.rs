//! Syscall-level plumbing
//!
//! This module resolves the per-architecture inotify syscall numbers at
//! compile time and provides the raw entry points used to invoke them.

pub mod nr;
mod raw;

pub use raw::{syscall0, syscall1, syscall2, syscall3};
