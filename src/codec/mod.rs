//! Row codec and artifact persistence
//!
//! The compression core only sees rows of text cells. This module turns bytes
//! into rows and back, and lays out the compressed artifact.

pub mod artifact;
pub mod config;
pub mod csv_codec;

pub use artifact::{read_artifact, write_artifact};
pub use config::CodecConfig;
pub use csv_codec::CsvRowCodec;

use crate::common::error::CsvDictResult;
use crate::compression::types::{Row, Table};
use std::io::{Read, Write};

/// Serialization of rows to and from a delimited text format
pub trait RowCodec {
    /// Reads every row from `source`
    fn read_rows(&self, source: &mut dyn Read) -> CsvDictResult<Table>;

    /// Writes `rows` to `sink` and flushes the codec's own buffering
    fn write_rows(&self, sink: &mut dyn Write, rows: &[Row]) -> CsvDictResult<()>;

    /// Returns the name of this row format
    fn name(&self) -> &'static str;
}
