//! Per-architecture inotify syscall numbers
//!
//! Syscall numbers are ABI facts, fixed per architecture. Exactly one of
//! the modules below is compiled in, selected by the build target; an
//! architecture with no entry is a build error, never a wrong default.

#[cfg(target_arch = "x86")]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT: c_long = 291;
	pub const INOTIFY_ADD_WATCH: c_long = 292;
	pub const INOTIFY_RM_WATCH: c_long = 293;
}

#[cfg(target_arch = "x86_64")]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT: c_long = 253;
	pub const INOTIFY_ADD_WATCH: c_long = 254;
	pub const INOTIFY_RM_WATCH: c_long = 255;
}

#[cfg(target_arch = "arm")]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT: c_long = 316;
	pub const INOTIFY_ADD_WATCH: c_long = 317;
	pub const INOTIFY_RM_WATCH: c_long = 318;
}

#[cfg(any(target_arch = "powerpc", target_arch = "powerpc64"))]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT: c_long = 275;
	pub const INOTIFY_ADD_WATCH: c_long = 276;
	pub const INOTIFY_RM_WATCH: c_long = 277;
}

#[cfg(target_arch = "s390x")]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT: c_long = 284;
	pub const INOTIFY_ADD_WATCH: c_long = 285;
	pub const INOTIFY_RM_WATCH: c_long = 286;
}

#[cfg(target_arch = "m68k")]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT: c_long = 284;
	pub const INOTIFY_ADD_WATCH: c_long = 285;
	pub const INOTIFY_RM_WATCH: c_long = 286;
}

#[cfg(any(target_arch = "sparc", target_arch = "sparc64"))]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT: c_long = 151;
	pub const INOTIFY_ADD_WATCH: c_long = 152;
	pub const INOTIFY_RM_WATCH: c_long = 156;
}

// o32 ABI, offset 4000
#[cfg(target_arch = "mips")]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT: c_long = 4284;
	pub const INOTIFY_ADD_WATCH: c_long = 4285;
	pub const INOTIFY_RM_WATCH: c_long = 4286;
}

// n64 ABI, offset 5000
#[cfg(target_arch = "mips64")]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT: c_long = 5243;
	pub const INOTIFY_ADD_WATCH: c_long = 5244;
	pub const INOTIFY_RM_WATCH: c_long = 5245;
}

// Generic-ABI targets were added to the kernel after inotify_init1 replaced
// inotify_init, so only the flags-taking form exists there.
#[cfg(any(
	target_arch = "aarch64",
	target_arch = "riscv32",
	target_arch = "riscv64",
	target_arch = "loongarch64"
))]
mod arch {
	use libc::c_long;

	pub const INOTIFY_INIT1: c_long = 26;
	pub const INOTIFY_ADD_WATCH: c_long = 27;
	pub const INOTIFY_RM_WATCH: c_long = 28;
}

#[cfg(not(any(
	target_arch = "x86",
	target_arch = "x86_64",
	target_arch = "arm",
	target_arch = "powerpc",
	target_arch = "powerpc64",
	target_arch = "s390x",
	target_arch = "m68k",
	target_arch = "sparc",
	target_arch = "sparc64",
	target_arch = "mips",
	target_arch = "mips64",
	target_arch = "aarch64",
	target_arch = "riscv32",
	target_arch = "riscv64",
	target_arch = "loongarch64"
)))]
compile_error!("inotify-raw: no inotify syscall numbers are known for this target architecture");

#[cfg(any(
	target_arch = "x86",
	target_arch = "x86_64",
	target_arch = "arm",
	target_arch = "powerpc",
	target_arch = "powerpc64",
	target_arch = "s390x",
	target_arch = "m68k",
	target_arch = "sparc",
	target_arch = "sparc64",
	target_arch = "mips",
	target_arch = "mips64",
	target_arch = "aarch64",
	target_arch = "riscv32",
	target_arch = "riscv64",
	target_arch = "loongarch64"
))]
pub use arch::*;

#[cfg(test)]
mod tests {
	use super::*;

	// libc ships SYS_ constants for the same numbers; the table must agree
	// with them wherever both exist.
	#[cfg(not(any(
		target_arch = "aarch64",
		target_arch = "riscv32",
		target_arch = "riscv64",
		target_arch = "loongarch64"
	)))]
	#[test]
	fn table_matches_libc() {
		assert_eq!(INOTIFY_INIT, libc::SYS_inotify_init);
		assert_eq!(INOTIFY_ADD_WATCH, libc::SYS_inotify_add_watch);
		assert_eq!(INOTIFY_RM_WATCH, libc::SYS_inotify_rm_watch);
	}

	#[cfg(any(
		target_arch = "aarch64",
		target_arch = "riscv32",
		target_arch = "riscv64",
		target_arch = "loongarch64"
	))]
	#[test]
	fn table_matches_libc() {
		assert_eq!(INOTIFY_INIT1, libc::SYS_inotify_init1);
		assert_eq!(INOTIFY_ADD_WATCH, libc::SYS_inotify_add_watch);
		assert_eq!(INOTIFY_RM_WATCH, libc::SYS_inotify_rm_watch);
	}
}
