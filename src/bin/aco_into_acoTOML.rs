#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	aco2gpl::{aco, initDiagnostics, stdoutRaw},
	serde::{ser, Serialize},
	std::{
		io::{self, Write},
		process::ExitCode,
	},
	tracing::error,
};

#[derive(Debug, thiserror::Error)]
enum Error {
	#[error(transparent)]
	Aco(#[from] aco::Error),
	#[error(transparent)]
	Toml(#[from] toml::ser::Error),
	#[error(transparent)]
	Io(#[from] io::Error),
}

#[derive(Serialize)]
struct AcoTOML<'a> {
	#[serde(rename = "recordSet")]
	recordSets: &'a [aco::Palette],
}

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

fn run() -> Result<(), Error> {
	let recordSets = &aco::readRecordSets(io::stdin().lock())?;
	stdoutRaw().write_all(toml_toStringPretty(&AcoTOML { recordSets })?.as_bytes())?;

	fn toml_toStringPretty<T: ?Sized + ser::Serialize>(value: &T) -> Result<String, toml::ser::Error> {
		let mut string = String::with_capacity(128);
		value.serialize((&mut toml::ser::Serializer::pretty(&mut string)).pretty_array(false))?;
		Ok(string)
	}

	Ok(())
}
