//! Raw syscall entry points
//!
//! Invokes the kernel directly by number, without going through a libc
//! wrapper for the specific call. On x86_64 this is the `syscall`
//! instruction itself; other targets forward through `libc::syscall`.
//!
//! All entry points share one result contract: a non-negative value is the
//! kernel's result, a negative value is the negated errno. The inline
//! assembly path gets this for free from the kernel ABI; the
//! `libc::syscall` paths fold errno back into the return value so callers
//! never have to look at thread-local errno themselves.

use libc::c_long;
#[cfg(not(target_arch = "x86_64"))]
use nix::errno::Errno;
#[cfg(target_arch = "x86_64")]
use std::arch::asm;

/// Make a system call with no arguments
///
/// # Safety
///
/// `num` must be a valid syscall number for this target, and the call
/// must be one the kernel accepts with no arguments.
#[cfg(target_arch = "x86_64")]
#[inline]
#[must_use] pub unsafe fn syscall0(num: c_long) -> c_long {
	let mut ret: c_long;
	unsafe {
		asm!(
			"syscall",
			inlateout("rax") num => ret,
			out("rcx") _,
			out("r11") _,
			options(nostack)
		);
	}
	ret
}

/// Make a system call with one argument
///
/// # Safety
///
/// `num` must be a valid syscall number for this target, and every
/// pointer argument must reference memory that stays valid for the
/// duration of the call.
#[cfg(target_arch = "x86_64")]
#[inline]
#[must_use] pub unsafe fn syscall1(num: c_long, arg1: c_long) -> c_long {
	let mut ret: c_long;
	unsafe {
		asm!(
			"syscall",
			inlateout("rax") num => ret,
			in("rdi") arg1,
			out("rcx") _,
			out("r11") _,
			options(nostack)
		);
	}
	ret
}

/// Make a system call with two arguments
///
/// # Safety
///
/// `num` must be a valid syscall number for this target, and every
/// pointer argument must reference memory that stays valid for the
/// duration of the call.
#[cfg(target_arch = "x86_64")]
#[inline]
#[must_use] pub unsafe fn syscall2(num: c_long, arg1: c_long, arg2: c_long) -> c_long {
	let mut ret: c_long;
	unsafe {
		asm!(
			"syscall",
			inlateout("rax") num => ret,
			in("rdi") arg1,
			in("rsi") arg2,
			out("rcx") _,
			out("r11") _,
			options(nostack)
		);
	}
	ret
}

/// Make a system call with three arguments
///
/// # Safety
///
/// `num` must be a valid syscall number for this target, and every
/// pointer argument must reference memory that stays valid for the
/// duration of the call.
#[cfg(target_arch = "x86_64")]
#[inline]
#[must_use] pub unsafe fn syscall3(num: c_long, arg1: c_long, arg2: c_long, arg3: c_long) -> c_long {
	let mut ret: c_long;
	unsafe {
		asm!(
			"syscall",
			inlateout("rax") num => ret,
			in("rdi") arg1,
			in("rsi") arg2,
			in("rdx") arg3,
			out("rcx") _,
			out("r11") _,
			options(nostack)
		);
	}
	ret
}

// libc::syscall reports failure as -1 plus errno; fold that back into the
// negated-errno convention the assembly path already follows.
#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn normalize(ret: c_long) -> c_long {
	if ret == -1 { -c_long::from(Errno::last_raw()) } else { ret }
}

/// Make a system call with no arguments
///
/// # Safety
///
/// `num` must be a valid syscall number for this target, and the call
/// must be one the kernel accepts with no arguments.
#[cfg(not(target_arch = "x86_64"))]
#[inline]
#[must_use] pub unsafe fn syscall0(num: c_long) -> c_long {
	normalize(unsafe { libc::syscall(num) })
}

/// Make a system call with one argument
///
/// # Safety
///
/// `num` must be a valid syscall number for this target, and every
/// pointer argument must reference memory that stays valid for the
/// duration of the call.
#[cfg(not(target_arch = "x86_64"))]
#[inline]
#[must_use] pub unsafe fn syscall1(num: c_long, arg1: c_long) -> c_long {
	normalize(unsafe { libc::syscall(num, arg1) })
}

/// Make a system call with two arguments
///
/// # Safety
///
/// `num` must be a valid syscall number for this target, and every
/// pointer argument must reference memory that stays valid for the
/// duration of the call.
#[cfg(not(target_arch = "x86_64"))]
#[inline]
#[must_use] pub unsafe fn syscall2(num: c_long, arg1: c_long, arg2: c_long) -> c_long {
	normalize(unsafe { libc::syscall(num, arg1, arg2) })
}

/// Make a system call with three arguments
///
/// # Safety
///
/// `num` must be a valid syscall number for this target, and every
/// pointer argument must reference memory that stays valid for the
/// duration of the call.
#[cfg(not(target_arch = "x86_64"))]
#[inline]
#[must_use] pub unsafe fn syscall3(num: c_long, arg1: c_long, arg2: c_long, arg3: c_long) -> c_long {
	normalize(unsafe { libc::syscall(num, arg1, arg2, arg3) })
}
