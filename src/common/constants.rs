//! Constants used throughout csvdict

/// Leading character that marks a cell as a coded reference
pub const REFERENCE_MARKER: char = '&';

/// Cells at or below this many characters are never substituted.
/// The shortest coded reference ("&0") is already two characters long.
pub const MAX_SKIPPED_LEN: usize = 2;

/// Default field delimiter for the row codec
pub const DEFAULT_DELIMITER: u8 = b',';

/// Default quote character for the row codec
pub const DEFAULT_QUOTE: u8 = b'"';
