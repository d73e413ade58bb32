/// Cell-level types shared by the encoder and decoder
///
/// A transformed cell is either a literal or a coded reference. The marker
/// character identifies references; a literal that itself starts with the
/// marker is written with one extra marker in front so it can never be
/// mistaken for a reference.
use crate::common::constants::{MAX_SKIPPED_LEN, REFERENCE_MARKER};
use crate::common::error::CsvDictResult;
use crate::corrupt_err;
use std::fmt;

/// One row of text cells
pub type Row = Vec<String>;

/// An ordered sequence of rows
pub type Table = Vec<Row>;

/// Returns whether a literal is long enough to be substituted
pub fn is_eligible(value: &str) -> bool {
    value.chars().count() > MAX_SKIPPED_LEN
}

/// Reference to the value at `index` in column `column`'s conversion list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodedReference {
    pub column: usize,
    pub index: usize,
}

impl CodedReference {
    pub fn new(column: usize, index: usize) -> Self {
        Self { column, index }
    }

    /// Length of the textual form, marker included
    pub fn encoded_len(&self) -> usize {
        let mut digits = 1;
        let mut rest = self.index / 10;
        while rest > 0 {
            digits += 1;
            rest /= 10;
        }
        REFERENCE_MARKER.len_utf8() + digits
    }
}

impl fmt::Display for CodedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", REFERENCE_MARKER, self.index)
    }
}

/// A transformed cell, classified once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedCell<'a> {
    /// Literal text, unescaped
    Literal(&'a str),

    /// Coded reference into the conversion map
    Reference(CodedReference),
}

impl<'a> EncodedCell<'a> {
    /// Classifies a raw transformed cell found at `column`
    ///
    /// `&&x` is the escaped literal `&x`; `&<digits>` is a reference; any other
    /// marker-prefixed cell is corrupt.
    pub fn parse(column: usize, raw: &'a str) -> CsvDictResult<Self> {
        let Some(rest) = raw.strip_prefix(REFERENCE_MARKER) else {
            return Ok(EncodedCell::Literal(raw));
        };

        if rest.starts_with(REFERENCE_MARKER) {
            return Ok(EncodedCell::Literal(rest));
        }

        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(corrupt_err!(
                "invalid coded reference '{}' in column {}",
                raw,
                column
            ));
        }

        let index = rest.parse::<usize>().map_err(|_| {
            corrupt_err!("coded reference '{}' in column {} is out of range", raw, column)
        })?;

        Ok(EncodedCell::Reference(CodedReference::new(column, index)))
    }
}

impl fmt::Display for EncodedCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodedCell::Literal(s) if s.starts_with(REFERENCE_MARKER) => {
                write!(f, "{}{}", REFERENCE_MARKER, s)
            }
            EncodedCell::Literal(s) => f.write_str(s),
            EncodedCell::Reference(r) => fmt::Display::fmt(r, f),
        }
    }
}
