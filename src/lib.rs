//! # csvscan
//!
//! Small CSV scanner for text that is already in memory. It turns a string
//! into rows of string fields, handling quoted fields, empty fields and
//! `\n` / `\r\n` line endings.
//!
//! Two modes are available through [`ParseMode`]:
//!
//! - [`ParseMode::Strict`] (default) splits the input into lines and rejects
//!   unterminated quotes ([`ParseError::MalformedField`]) and stray characters
//!   after a closing quote ([`ParseError::UnexpectedCharacterAfterQuote`]).
//!   A final line terminator does not produce an extra empty row.
//! - [`ParseMode::Permissive`] toggles quoting on every quote character and
//!   accepts any input. Quoted fields may span lines, and a trailing newline
//!   produces a final row holding one empty field.
//!
//! Doubled quotes (`""`) are never turned into a literal quote, and fields
//! are never typed or trimmed.
//!
//! ## Quick Start
//!
//! ```
//! use csvscan::{parse, CsvParser, ParseMode};
//!
//! let table = parse("one,2,,three\nfive,six,\"hello,q\"").unwrap();
//! assert_eq!(
//!     table,
//!     vec![vec!["one", "2", "", "three"], vec!["five", "six", "hello,q"]]
//! );
//!
//! let loose = CsvParser::default().mode(ParseMode::Permissive);
//! assert_eq!(loose.parse("a\n").unwrap(), vec![vec!["a"], vec![""]]);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ParserOptions`] and [`ParseMode`]
//! - `parallel`: [`batch::parse_all`] runs on rayon's thread pool

pub mod batch;
pub mod csv;
pub mod error;
pub mod source;

pub use csv::{CsvParser, ParseMode, ParserOptions, Row, Table};
pub use error::{CsvError, ParseError, Result};

/// Parse with the default parser (`,` delimiter, `"` quote, strict mode)
pub fn parse(input: &str) -> std::result::Result<Table, ParseError> {
    CsvParser::default().parse(input)
}
