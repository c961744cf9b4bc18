//! Loading CSV text from files
//!
//! The parser itself only sees `&str`. Picking an encoding and reading the
//! bytes is the caller's job, and this module covers the common cases for
//! fixtures and benchmarks.

use crate::csv::{CsvParser, Table};
use crate::error::{CsvError, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Text encoding of a CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// UTF-8; invalid byte sequences are an error
    #[default]
    Utf8,
    /// ISO-8859-1; every byte maps to the code point with the same value
    Latin1,
}

/// Decode raw bytes into a string
///
/// # Examples
///
/// ```
/// use csvscan::source::{decode, Encoding};
///
/// assert_eq!(decode(b"caf\xe9", Encoding::Latin1).unwrap(), "café");
/// assert!(decode(b"caf\xe9", Encoding::Utf8).is_err());
/// ```
pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Utf8 => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| CsvError::Decode(format!("Invalid UTF-8: {}", e))),
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
    }
}

/// Read a whole file and decode it
pub fn read_to_string<P: AsRef<Path>>(path: P, encoding: Encoding) -> Result<String> {
    let path_ref = path.as_ref();
    let bytes = fs::read(path_ref)?;

    info!(
        path = %path_ref.display(),
        ?encoding,
        bytes = bytes.len(),
        "loaded csv file"
    );

    decode(&bytes, encoding)
}

/// Read, decode and parse a file in one step
///
/// # Examples
///
/// ```no_run
/// use csvscan::source::{parse_file, Encoding};
/// use csvscan::CsvParser;
///
/// let table = parse_file("small.txt", Encoding::Latin1, &CsvParser::default()).unwrap();
/// println!("{} rows", table.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(
    path: P,
    encoding: Encoding,
    parser: &CsvParser,
) -> Result<Table> {
    let text = read_to_string(path, encoding)?;
    Ok(parser.parse(&text)?)
}
