//! CSV scanning into rows of string fields
//!
//! Two scanners share one entry point, [`CsvParser::parse`]:
//!
//! - **Strict** (default): the input is split into lines on `\n`, `\r\n` or a
//!   bare `\r`, then each line is scanned field by field. A field is quoted
//!   only when it starts with the quote character, and the closing quote must
//!   be followed by a delimiter or the end of the line.
//! - **Permissive**: one pass over the whole input where every quote toggles a
//!   quoted span. Nothing is ever rejected; an unterminated quote swallows the
//!   rest of the input.
//!
//! Neither scanner translates `""` into `"`.

use super::options::{ParseMode, ParserOptions};
use crate::error::{ParseError, Result};
use std::mem;
use tracing::debug;

/// One line's worth of fields
pub type Row = Vec<String>;

/// All rows produced by one parse call, in line order
pub type Table = Vec<Row>;

/// CSV parser for in-memory text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvParser {
    options: ParserOptions,
}

/// What stopped a strict-mode field scan
enum FieldEnd {
    Delimiter,
    EndOfLine,
}

impl CsvParser {
    /// Create a new CSV parser with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            options: ParserOptions {
                delimiter,
                quote_char,
                ..Default::default()
            },
        }
    }

    /// Build a parser from options without checking them
    pub fn from_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Build a parser from options, rejecting unusable delimiter/quote pairs
    pub fn try_from_options(options: ParserOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Set the scanning mode (builder pattern)
    ///
    /// # Examples
    ///
    /// ```
    /// use csvscan::{CsvParser, ParseMode};
    ///
    /// let parser = CsvParser::default().mode(ParseMode::Permissive);
    /// let table = parser.parse("a,\"b\nc\"").unwrap();
    /// assert_eq!(table, vec![vec!["a", "b\nc"]]);
    /// ```
    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Current settings
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse the whole input into a table
    ///
    /// Always yields at least one row. Permissive mode never returns `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvscan::CsvParser;
    ///
    /// let table = CsvParser::default().parse("one,\"qu,ote\",2").unwrap();
    /// assert_eq!(table, vec![vec!["one", "qu,ote", "2"]]);
    /// ```
    pub fn parse(&self, input: &str) -> std::result::Result<Table, ParseError> {
        let result = match self.options.mode {
            ParseMode::Strict => self.parse_strict(input),
            ParseMode::Permissive => Ok(self.parse_permissive(input)),
        };

        match &result {
            Ok(table) => debug!(
                mode = ?self.options.mode,
                input_len = input.len(),
                rows = table.len(),
                "parsed csv input"
            ),
            Err(err) => debug!(error = %err, "rejected csv input"),
        }

        result
    }

    fn parse_strict(&self, input: &str) -> std::result::Result<Table, ParseError> {
        let mut table = Table::new();
        for (index, line) in LineSplitter::new(input).enumerate() {
            table.push(self.parse_line(line, index + 1)?);
        }
        if table.is_empty() {
            table.push(vec![String::new()]);
        }
        Ok(table)
    }

    /// Parse one line (no terminator) into fields
    fn parse_line(&self, line: &str, line_no: usize) -> std::result::Result<Row, ParseError> {
        let mut fields = Row::new();
        let mut current = String::new();
        let mut chars = line.chars().enumerate().peekable();

        loop {
            let starts_quoted =
                matches!(chars.peek(), Some(&(_, ch)) if ch == self.options.quote_char as char);

            let end = if starts_quoted {
                self.scan_quoted(&mut chars, &mut current, line_no)?
            } else {
                self.scan_unquoted(&mut chars, &mut current)
            };

            fields.push(mem::take(&mut current));
            if let FieldEnd::EndOfLine = end {
                return Ok(fields);
            }
        }
    }

    /// Field starting with the quote character; `chars` is positioned on that quote
    fn scan_quoted<I>(
        &self,
        chars: &mut I,
        current: &mut String,
        line_no: usize,
    ) -> std::result::Result<FieldEnd, ParseError>
    where
        I: Iterator<Item = (usize, char)>,
    {
        let quote = self.options.quote_char as char;
        let open_column = match chars.next() {
            Some((index, _)) => index + 1,
            None => 1,
        };

        let mut closed = false;
        for (_, ch) in chars.by_ref() {
            if ch == quote {
                closed = true;
                break;
            }
            current.push(ch);
        }
        if !closed {
            return Err(ParseError::MalformedField {
                line: line_no,
                column: open_column,
            });
        }

        match chars.next() {
            None => Ok(FieldEnd::EndOfLine),
            Some((_, ch)) if ch == self.options.delimiter as char => Ok(FieldEnd::Delimiter),
            Some((index, found)) => Err(ParseError::UnexpectedCharacterAfterQuote {
                line: line_no,
                column: index + 1,
                found,
            }),
        }
    }

    /// Plain field; quotes inside it are ordinary content
    fn scan_unquoted<I>(&self, chars: &mut I, current: &mut String) -> FieldEnd
    where
        I: Iterator<Item = (usize, char)>,
    {
        for (_, ch) in chars {
            if ch == self.options.delimiter as char {
                return FieldEnd::Delimiter;
            }
            current.push(ch);
        }
        FieldEnd::EndOfLine
    }

    fn parse_permissive(&self, input: &str) -> Table {
        let quote = self.options.quote_char as char;
        let delimiter = self.options.delimiter as char;

        let mut table = Table::new();
        let mut row = Row::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == quote {
                in_quotes = !in_quotes;
            } else if in_quotes {
                current.push(ch);
            } else if ch == delimiter {
                row.push(mem::take(&mut current));
            } else if ch == '\n' {
                row.push(mem::take(&mut current));
                table.push(mem::take(&mut row));
            } else if ch == '\r' && chars.peek() == Some(&'\n') {
                // CR of a CRLF terminator; the LF ends the row
            } else {
                current.push(ch);
            }
        }

        row.push(current);
        table.push(row);
        table
    }
}

/// Splits text on `\n`, `\r\n` and bare `\r`
///
/// A terminator at the very end of the input does not start another line.
struct LineSplitter<'a> {
    rest: Option<&'a str>,
}

impl<'a> LineSplitter<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: if input.is_empty() { None } else { Some(input) },
        }
    }
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                let remainder = &rest[pos + skip..];
                self.rest = if remainder.is_empty() {
                    None
                } else {
                    Some(remainder)
                };
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
