#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	aco2gpl::{aco, gpl, initDiagnostics, stdoutRaw},
	std::{
		io::{self, BufWriter},
		process::ExitCode,
	},
	tracing::{error, info, warn},
};

fn main() -> ExitCode {
	initDiagnostics();
	match run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{err}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<(), aco::Error> {
	let palette = aco::readPreferred(io::stdin().lock())?;
	info!("Generating GPL...");
	match palette {
		Some(palette) => gpl::writePalette(&mut BufWriter::new(stdoutRaw()), &palette)?,
		// still a successful run
		None => warn!("No data!"),
	}
	info!("Done.");
	Ok(())
}
