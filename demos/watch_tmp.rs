//! Watch a directory and drain one burst of raw event bytes.
//!
//! The binding layer stops at the three kernel calls; this demo plays the
//! role of the consumer that owns the descriptor and its event stream. It
//! reads a single buffer of raw bytes without decoding them.
//!
//! Run it with:
//! ```bash
//! INOTIFY_RAW_DEBUG=1 cargo run --example watch_tmp -- /tmp
//! ```

use inotify_raw::util::init_logging;
use inotify_raw::{add_watch, init, rm_watch};

fn main() -> inotify_raw::Result<()> {
	init_logging();

	let dir = std::env::args().nth(1).unwrap_or_else(|| "/tmp".to_string());

	let fd = init()?;
	let wd = add_watch(fd, &dir, libc::IN_CREATE | libc::IN_DELETE | libc::IN_MODIFY)?;
	println!("watching {dir} (wd {wd}); touch something in there...");

	let mut buf = [0u8; 4096];
	let n = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), buf.len()) };
	if n < 0 {
		eprintln!("read failed: {}", std::io::Error::last_os_error());
	} else {
		println!("got {n} bytes of raw event data");
	}

	rm_watch(fd, wd)?;
	unsafe { libc::close(fd) };
	Ok(())
}
