//! Parser configuration

use crate::error::{CsvError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the parser treats quoting problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParseMode {
    /// Split into lines first, then scan fields; bad quoting is an error
    #[default]
    Strict,
    /// Single toggle scan over the whole input; never fails
    Permissive,
}

/// Settings for a [`CsvParser`](super::CsvParser)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserOptions {
    /// Field separator (default `,`)
    pub delimiter: u8,
    /// Quote character (default `"`)
    pub quote_char: u8,
    /// Strict or permissive scanning
    pub mode: ParseMode,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_char: b'"',
            mode: ParseMode::Strict,
        }
    }
}

impl ParserOptions {
    /// Check that delimiter and quote can be told apart from each other and from line breaks
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.quote_char {
            return Err(CsvError::InvalidOptions(format!(
                "delimiter and quote character are both {:?}",
                self.delimiter as char
            )));
        }
        for (name, byte) in [("delimiter", self.delimiter), ("quote character", self.quote_char)] {
            if byte == b'\n' || byte == b'\r' {
                return Err(CsvError::InvalidOptions(format!(
                    "{} cannot be a line break",
                    name
                )));
            }
        }
        Ok(())
    }
}
