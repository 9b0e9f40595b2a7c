//! # Poem File IO
//!
//! Poem files are UTF-8 text, one `title:body` poem per line.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::VCResult;

/// Read all lines from a UTF-8 poem line reader.
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_poem_lines<R: BufRead>(reader: R) -> VCResult<Vec<String>> {
    Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
}

/// Load all lines from a UTF-8 poem file.
///
/// ## Arguments
/// * `path` - the path to the poem file.
pub fn load_poem_lines_path<P: AsRef<Path>>(path: P) -> VCResult<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    read_poem_lines(reader)
}
