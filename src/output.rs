//! Text file emission.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::ascii::AsciiGrid;

/// Write the grid to `{name}.txt`, one line of text per image row.
///
/// Each line holds exactly `width` characters followed by a newline; no
/// header or trailer. Returns the path written.
pub fn save_as_text(grid: &AsciiGrid, name: &str) -> io::Result<PathBuf> {
    let path = PathBuf::from(format!("{}.txt", name));
    let mut writer = BufWriter::new(File::create(&path)?);

    for line in grid.lines() {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(path)
}
