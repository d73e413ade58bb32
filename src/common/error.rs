//! Error handling for csvdict

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for csvdict operations
#[derive(Error, Debug)]
pub enum CsvDictError {
    #[error("Could not read input {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write output {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt data: {0}")]
    CorruptData(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CsvDictError {
    /// Attributes a bare I/O failure to the input file at `path`
    pub fn at_input(self, path: &Path) -> Self {
        match self {
            CsvDictError::Io(source) => CsvDictError::InputUnavailable {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }

    /// Attributes a bare I/O failure to the output file at `path`
    pub fn at_output(self, path: &Path) -> Self {
        match self {
            CsvDictError::Io(source) => CsvDictError::OutputUnwritable {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }

    /// Prefixes a corrupt-data message with the row it was found in
    pub fn in_row(self, row: usize) -> Self {
        match self {
            CsvDictError::CorruptData(msg) => CsvDictError::CorruptData(format!("row {}: {}", row, msg)),
            other => other,
        }
    }
}

impl From<csv::Error> for CsvDictError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return CsvDictError::Parse(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(e) => CsvDictError::Io(e),
            kind => CsvDictError::Parse(format!("{:?}", kind)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CsvDictError>;

/// Result type alias for csvdict operations (alias for Result)
pub type CsvDictResult<T> = std::result::Result<T, CsvDictError>;

/// Macro for creating corrupt data errors
#[macro_export]
macro_rules! corrupt_err {
    ($msg:expr) => {
        $crate::common::error::CsvDictError::CorruptData($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::CsvDictError::CorruptData(format!($fmt, $($arg)*))
    };
}
