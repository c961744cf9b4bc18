//! Parsing many independent inputs
//!
//! With the `parallel` feature the inputs are spread over rayon's global
//! thread pool. Output order always matches input order.

use crate::csv::{CsvParser, Table};
use crate::error::ParseError;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parse every input with the same parser
///
/// # Examples
///
/// ```
/// use csvscan::batch::parse_all;
/// use csvscan::CsvParser;
///
/// let results = parse_all(&CsvParser::default(), &["a,b", "\"open"]);
/// assert_eq!(results[0].as_ref().unwrap(), &vec![vec!["a", "b"]]);
/// assert!(results[1].is_err());
/// ```
pub fn parse_all<S>(parser: &CsvParser, inputs: &[S]) -> Vec<Result<Table, ParseError>>
where
    S: AsRef<str> + Sync,
{
    debug!(inputs = inputs.len(), "parsing csv batch");

    #[cfg(feature = "parallel")]
    let results = inputs
        .par_iter()
        .map(|input| parser.parse(input.as_ref()))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = inputs
        .iter()
        .map(|input| parser.parse(input.as_ref()))
        .collect();

    results
}
