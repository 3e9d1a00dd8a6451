//! GIMP palette (`.gpl`) text output.

use {
	crate::aco::{ColorEntry, Palette},
	const_format::concatcp,
	std::io::{self, Write},
};

pub const DEFAULT_NAME: &str = "Untitled";
pub const COLUMNS: u32 = 16;
pub const HEADER: &str = concatcp!("GIMP Palette\nName: ", DEFAULT_NAME, "\nColumns: ", COLUMNS, "\n#");

/// One `r g b name` line per entry; an entry without a name still gets the separating space.
/// Each entry starts its own line, so the text never ends in a newline.
pub fn writePalette(out: &mut impl Write, palette: &Palette) -> io::Result<()> {
	out.write_all(HEADER.as_bytes())?;
	for ColorEntry { r, g, b, name } in &palette.colors {
		write!(out, "\n{r} {g} {b} {}", name.as_deref().unwrap_or_default())?;
	}
	out.flush()
}
