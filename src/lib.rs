#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

pub mod aco;
pub mod gpl;

use {
	std::{fs::File, io, os},
	tracing_subscriber::EnvFilter,
};

/// Routes `tracing` output to stderr, plain lines, filtered by `RUST_LOG` (default `info`).
pub fn initDiagnostics() {
	tracing_subscriber::fmt()
		.with_writer(io::stderr)
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_ansi(false)
		.without_time()
		.with_target(false)
		.with_level(false)
		.init();
}

#[cfg(unix)]
pub fn stdoutRaw() -> File {
	use os::unix::io::FromRawFd;
	unsafe { File::from_raw_fd(1) }
}

#[cfg(windows)]
pub fn stdoutRaw() -> File {
	use os::windows::io::{AsRawHandle, FromRawHandle};
	unsafe { File::from_raw_handle(io::stdout().as_raw_handle()) }
}
