pub mod output;
pub mod walker;

pub use output::OutputDestination;
pub use walker::{find_go_files, FileWalker};

use crate::core::{line_column, Error, Result};
use std::fs;
use std::path::Path;

/// Read a source file, attributing failures to `path`.
///
/// Bytes that are not valid UTF-8 are a parse failure at the first bad byte,
/// not an I/O failure.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        let valid = e.utf8_error().valid_up_to();
        let (line, column) = line_column(&e.as_bytes()[..valid]);
        Error::parse(path, line, column, "illegal UTF-8 encoding")
    })
}
