//! Row codec configuration
//!
//! Controls the delimited text syntax used for both the input table and the
//! rows region of a compressed artifact.

use crate::common::constants::{DEFAULT_DELIMITER, DEFAULT_QUOTE};
use serde::{Deserialize, Serialize};

/// Delimiter and quoting settings for the CSV row codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Quote byte
    pub quote: u8,
}

impl CodecConfig {
    /// Create the default configuration (`,` and `"`)
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
