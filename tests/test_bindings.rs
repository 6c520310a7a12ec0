//! Integration tests for the three inotify operations
//!
//! These run against the live kernel: every test creates its own
//! instance(s) and scratch directories, so they are independent and safe
//! to run in parallel.

use inotify_raw::{InotifyError, add_watch, init, rm_watch};
use std::os::unix::io::RawFd;
use std::thread;

fn close(fd: RawFd) {
	unsafe { libc::close(fd) };
}

#[test]
fn init_returns_usable_descriptor() {
	let fd = init().expect("inotify instance");
	assert!(fd >= 0);
	close(fd);
}

#[test]
fn add_and_remove_round_trip() {
	let dir = tempfile::tempdir().unwrap();
	let fd = init().unwrap();

	let wd = add_watch(fd, dir.path(), libc::IN_CREATE | libc::IN_DELETE).unwrap();
	let status = rm_watch(fd, wd).unwrap();
	assert_eq!(status, 0);

	close(fd);
}

#[test]
fn add_watch_rejects_dead_instance() {
	let dir = tempfile::tempdir().unwrap();

	let err = add_watch(-1, dir.path(), libc::IN_CREATE).unwrap_err();
	assert_eq!(err.raw_os_error(), Some(libc::EBADF));
}

#[test]
fn add_watch_rejects_missing_path() {
	let fd = init().unwrap();

	let err = add_watch(fd, "/nonexistent/definitely/not/here", libc::IN_CREATE).unwrap_err();
	assert_eq!(err.raw_os_error(), Some(libc::ENOENT));

	close(fd);
}

#[test]
fn interior_nul_fails_before_the_kernel_call() {
	let fd = init().unwrap();

	let err = add_watch(fd, "/tmp/bad\0path", libc::IN_CREATE).unwrap_err();
	assert!(matches!(err, InotifyError::Path(_)));
	assert_eq!(err.raw_os_error(), None);

	close(fd);
}

#[test]
fn mask_add_reuses_the_descriptor() {
	let dir = tempfile::tempdir().unwrap();
	let fd = init().unwrap();

	let first = add_watch(fd, dir.path(), libc::IN_CREATE).unwrap();
	let second = add_watch(fd, dir.path(), libc::IN_DELETE | libc::IN_MASK_ADD).unwrap();
	assert_eq!(first, second);

	rm_watch(fd, first).unwrap();
	close(fd);
}

#[test]
fn removing_twice_fails_the_second_time() {
	let dir = tempfile::tempdir().unwrap();
	let fd = init().unwrap();

	let wd = add_watch(fd, dir.path(), libc::IN_CREATE).unwrap();
	rm_watch(fd, wd).unwrap();

	let err = rm_watch(fd, wd).unwrap_err();
	assert_eq!(err.raw_os_error(), Some(libc::EINVAL));

	close(fd);
}

#[test]
fn fabricated_descriptor_is_rejected() {
	let fd = init().unwrap();

	let err = rm_watch(fd, 0xDEAD).unwrap_err();
	assert_eq!(err.raw_os_error(), Some(libc::EINVAL));

	close(fd);
}

#[test]
fn independent_instances_do_not_interfere() {
	thread::scope(|s| {
		for _ in 0..2 {
			s.spawn(|| {
				let dir = tempfile::tempdir().unwrap();
				let fd = init().unwrap();
				for _ in 0..50 {
					let wd = add_watch(fd, dir.path(), libc::IN_CREATE).unwrap();
					rm_watch(fd, wd).unwrap();
				}
				close(fd);
			});
		}
	});
}

#[test]
fn shared_instance_is_safe_to_use_concurrently() {
	let fd = init().unwrap();

	thread::scope(|s| {
		for _ in 0..2 {
			s.spawn(|| {
				let dir = tempfile::tempdir().unwrap();
				for _ in 0..50 {
					let wd = add_watch(fd, dir.path(), libc::IN_MODIFY).unwrap();
					rm_watch(fd, wd).unwrap();
				}
			});
		}
	});

	close(fd);
}
