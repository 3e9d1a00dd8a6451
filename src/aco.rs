//! Photoshop color swatch (`.aco`) streams: big-endian 16-bit words, one or two record sets back to back.

use {
	byteorder::{ReadBytesExt, BE},
	core::fmt,
	serde::Serialize,
	std::{
		collections::TryReserveError,
		io::{self, Read},
	},
	tracing::{info, warn},
};

pub const RGB_COLORSPACE: u16 = 0;
pub const NUM_COMPONENT_SLOTS: usize = 4;
pub const NAME_CAPACITY: usize = u8::MAX as _;
pub const MAX_RECORD_SETS: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
	#[error("Unexpected end of file!")]
	UnexpectedEof,
	#[error("reading ACO stream version: Unknown ACO file version {version}. Exiting...")]
	UnknownVersion { version: u16 },
	#[error("Out of memory!")]
	OutOfMemory(#[from] TryReserveError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "u16")]
pub enum Version {
	V1 = 1,
	V2 = 2,
}

impl TryFrom<u16> for Version {
	type Error = Error;

	fn try_from(version: u16) -> Result<Self, Error> {
		match version {
			1 => Ok(Version::V1),
			2 => Ok(Version::V2),
			version => Err(Error::UnknownVersion { version }),
		}
	}
}

impl From<Version> for u16 {
	fn from(version: Version) -> u16 {
		version as _
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Version::V1 => f.write_str("1 (photoshop < 7.0)"),
			Version::V2 => f.write_str("2 (photoshop >= 7.0)"),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
	pub r: u8,
	pub g: u8,
	pub b: u8,

	/// Always present for version 2 entries, never for version 1.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
	pub version: Version,
	pub declaredCount: u16,

	/// Non-RGB records leave no entry behind, so `colors.len() <= declaredCount`.
	#[serde(rename = "color")]
	pub colors: Vec<ColorEntry>,
}

pub struct WordReader<R> {
	inner: R,
}

impl<R: Read> WordReader<R> {
	pub fn new(inner: R) -> Self {
		WordReader { inner }
	}

	/// `None` once fewer than two bytes remain.
	pub fn readWord(&mut self) -> Result<Option<u16>, Error> {
		match self.inner.read_u16::<BE>() {
			Ok(word) => Ok(Some(word)),
			Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
			Err(err) => Err(err.into()),
		}
	}

	pub fn requireWord(&mut self) -> Result<u16, Error> {
		self.readWord()?.ok_or(Error::UnexpectedEof)
	}

	pub fn skipWords(&mut self, numWords: usize) -> Result<(), Error> {
		for _ in 0..numWords {
			self.requireWord()?;
		}
		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
	pub version: Version,
	pub declaredCount: u16,
}

/// `Ok(None)` when the stream is already exhausted: there is no further record set.
pub fn readHeader<R: Read>(words: &mut WordReader<R>) -> Result<Option<Header>, Error> {
	let Some(version) = words.readWord()? else {
		return Ok(None);
	};
	let version = Version::try_from(version)?;
	info!("reading ACO stream version: {version}");
	let declaredCount = words.requireWord()?;
	info!("{declaredCount} colors in this file");
	Ok(Some(Header { version, declaredCount }))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedColor {
	Rgb(ColorEntry),
	Skipped { colorspace: u16 },
}

/*
	Color record layout, in words:

	colorspace, 4 component slots,
	and for version 2 only: 1 unknown word, name length N, N-1 name units, 1 terminator unit.

	RGB uses the first 3 slots with 16 bits of depth each; the 4th is unused.
*/
pub fn decodeColor<R: Read>(words: &mut WordReader<R>, version: Version) -> Result<DecodedColor, Error> {
	let colorspace = words.requireWord()?;
	if colorspace != RGB_COLORSPACE {
		words.skipWords(NUM_COMPONENT_SLOTS)?;
		if version == Version::V2 {
			words.skipWords(1)?;
			let nameLen = words.requireWord()?;
			words.skipWords(nameLen.into())?;
		}
		return Ok(DecodedColor::Skipped { colorspace });
	}

	let r = reduceDepth(words.requireWord()?);
	let g = reduceDepth(words.requireWord()?);
	let b = reduceDepth(words.requireWord()?);
	words.skipWords(NUM_COMPONENT_SLOTS - 3)?;
	let name = match version {
		Version::V1 => None,
		Version::V2 => {
			words.skipWords(1)?;
			Some(decodeName(words)?)
		}
	};
	Ok(DecodedColor::Rgb(ColorEntry { r, g, b, name }))
}

#[inline]
fn reduceDepth(word: u16) -> u8 {
	word.to_be_bytes()[0]
}

// Declared length counts the terminator. Units past NAME_CAPACITY or past a NUL are consumed, not kept.
fn decodeName<R: Read>(words: &mut WordReader<R>) -> Result<String, Error> {
	let numUnits = usize::from(words.requireWord()?).saturating_sub(1);
	let mut units = Vec::with_capacity(numUnits.min(NAME_CAPACITY));
	for i in 0..numUnits {
		let unit = words.requireWord()?;
		if i < NAME_CAPACITY {
			units.push(unit);
		}
	}
	words.skipWords(1)?;
	Ok(units
		.into_iter()
		.take_while(|&unit| unit != 0)
		// full UTF-16 is out of scope: anything beyond Latin-1 becomes a space
		// Latin-1 units are kept as chars, so 0x80..=0xFF come out as two-byte UTF-8
		.map(|unit| u8::try_from(unit).map_or(' ', char::from))
		.collect())
}

/// `Ok(None)` when the stream holds no further record set.
pub fn readRecordSet<R: Read>(words: &mut WordReader<R>) -> Result<Option<Palette>, Error> {
	let Some(Header { version, declaredCount }) = readHeader(words)? else {
		return Ok(None);
	};
	let mut colors = Vec::new();
	colors.try_reserve_exact(declaredCount.into())?;
	for _ in 0..declaredCount {
		match decodeColor(words, version)? {
			DecodedColor::Rgb(entry) => colors.push(entry),
			DecodedColor::Skipped { colorspace } => warn!("Non RGB color (colorspace {colorspace}) skipped"),
		}
	}
	Ok(Some(Palette { version, declaredCount, colors }))
}

/// Every record set in the stream, in order.
pub fn readRecordSets(reader: impl Read) -> Result<Vec<Palette>, Error> {
	let words = &mut WordReader::new(reader);
	let mut recordSets = Vec::with_capacity(MAX_RECORD_SETS);
	for _ in 0..MAX_RECORD_SETS {
		if let Some(palette) = readRecordSet(words)? {
			recordSets.push(palette);
		}
	}
	Ok(recordSets)
}

/// The later record set wins; version 2 files carry a version 1 set in front of it.
pub fn readPreferred(reader: impl Read) -> Result<Option<Palette>, Error> {
	Ok(readRecordSets(reader)?.pop())
}
