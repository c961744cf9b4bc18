//! CSV scanning and parser configuration

mod options;
mod parser;

pub use options::{ParseMode, ParserOptions};
pub use parser::{CsvParser, Row, Table};
