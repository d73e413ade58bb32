//! csvdict - Dictionary-substitution compression for CSV tables
//!
//! Every column gets its own frequency-ranked list of distinct values. Cells
//! longer than two characters are replaced by a short coded reference
//! (`&` plus an index into that column's list). The compressed artifact is the
//! list set ("conversion map") on the first line, followed by the transformed
//! rows.
//!
pub mod codec;
pub mod common;
pub mod compression;
pub mod pipeline;

// Re-export common types for convenience
pub use common::{CsvDictError, CsvDictResult};

// Re-export the compression core for convenience
pub use compression::{
    CodedReference, CompressionStats, ConversionMap, Decoder, EncodedCell, Encoder, MapBuilder,
    Row, Table,
};

// Re-export codecs for convenience
pub use codec::{CodecConfig, CsvRowCodec, RowCodec};

// Re-export pipelines for convenience
pub use pipeline::{
    compress_table, decompress_table, CompressionReport, Compressor, DecompressionReport,
};
