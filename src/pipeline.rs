//! Compression pipelines
//!
//! Ties the row codec, map builder, encoder, decoder and artifact layout
//! together. Compression reads the whole table, builds the map, encodes and
//! writes; decompression reads the artifact, decodes and writes. Output files
//! are only created once the in-memory work has succeeded.

use crate::codec::{read_artifact, write_artifact, CsvRowCodec, RowCodec};
use crate::common::error::{CsvDictError, CsvDictResult};
use crate::compression::{CompressionStats, ConversionMap, Decoder, Encoder, MapBuilder, Table};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Builds the map for `rows` and encodes them against it
pub fn compress_table<S: AsRef<str>>(rows: &[Vec<S>]) -> (ConversionMap, Table) {
    let map = MapBuilder::build(rows);
    let encoded = Encoder::new(&map).encode_table(rows);
    (map, encoded)
}

/// Restores the original rows from a map and its encoded rows
pub fn decompress_table<S: AsRef<str>>(map: &ConversionMap, rows: &[Vec<S>]) -> CsvDictResult<Table> {
    Decoder::new(map).decode_table(rows)
}

/// Outcome of a file compression run
#[derive(Debug, Clone)]
pub struct CompressionReport {
    pub original_size: u64,
    pub compressed_size: u64,
    pub rows: usize,
    /// Columns with a conversion list
    pub columns: usize,
    pub elapsed: Duration,
}

impl CompressionStats for CompressionReport {
    fn uncompressed_size(&self) -> u64 {
        self.original_size
    }

    fn compressed_size(&self) -> u64 {
        self.compressed_size
    }
}

/// Outcome of a file decompression run
#[derive(Debug, Clone)]
pub struct DecompressionReport {
    pub rows: usize,
    pub elapsed: Duration,
}

/// Runs both pipelines with a chosen row codec
#[derive(Debug, Clone, Default)]
pub struct Compressor<C: RowCodec = CsvRowCodec> {
    codec: C,
}

impl Compressor<CsvRowCodec> {
    /// Create a compressor using the default CSV codec
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: RowCodec> Compressor<C> {
    /// Create a compressor using a specific row codec
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Compresses already-parsed rows into an artifact written to `sink`
    pub fn compress_rows<S: AsRef<str>>(
        &self,
        rows: &[Vec<S>],
        sink: &mut dyn Write,
    ) -> CsvDictResult<ConversionMap> {
        let (map, encoded) = compress_table(rows);
        write_artifact(sink, &map, &encoded, &self.codec)?;
        sink.flush()?;
        Ok(map)
    }

    /// Compresses a table read from `source` into `sink`
    pub fn compress<R: Read, W: Write>(&self, mut source: R, mut sink: W) -> CsvDictResult<ConversionMap> {
        let rows = self.codec.read_rows(&mut source)?;
        self.compress_rows(&rows, &mut sink)
    }

    /// Decompresses an artifact from `source` into `sink`, returning the row count
    pub fn decompress<R: Read, W: Write>(&self, source: R, mut sink: W) -> CsvDictResult<usize> {
        let rows = self.decode_artifact(source)?;
        self.codec.write_rows(&mut sink, &rows)?;
        sink.flush()?;
        Ok(rows.len())
    }

    fn decode_artifact<R: Read>(&self, source: R) -> CsvDictResult<Table> {
        let (map, encoded) = read_artifact(&mut BufReader::new(source), &self.codec)?;
        debug!(columns = map.column_count(), rows = encoded.len(), "loaded artifact");
        decompress_table(&map, &encoded)
    }

    /// Compresses the table at `input` into a new artifact at `output`
    pub fn compress_file(&self, input: &Path, output: &Path) -> CsvDictResult<CompressionReport> {
        let start = Instant::now();

        let rows = {
            let file = File::open(input).map_err(|e| CsvDictError::Io(e).at_input(input))?;
            self.codec
                .read_rows(&mut BufReader::new(file))
                .map_err(|e| e.at_input(input))?
        };
        debug!(rows = rows.len(), codec = self.codec.name(), "read input table");

        let (map, encoded) = compress_table(&rows);

        let file = File::create(output).map_err(|e| CsvDictError::Io(e).at_output(output))?;
        let mut sink = BufWriter::new(file);
        write_artifact(&mut sink, &map, &encoded, &self.codec)
            .and_then(|_| sink.flush().map_err(CsvDictError::from))
            .map_err(|e| e.at_output(output))?;

        let original_size = fs::metadata(input)
            .map_err(|e| CsvDictError::Io(e).at_input(input))?
            .len();
        let compressed_size = fs::metadata(output)
            .map_err(|e| CsvDictError::Io(e).at_output(output))?
            .len();

        let report = CompressionReport {
            original_size,
            compressed_size,
            rows: rows.len(),
            columns: map.column_count(),
            elapsed: start.elapsed(),
        };
        info!(
            input = %input.display(),
            output = %output.display(),
            rows = report.rows,
            ratio = report.compression_ratio(),
            "compressed"
        );
        Ok(report)
    }

    /// Decompresses the artifact at `input` into a table at `output`
    ///
    /// Nothing is written if any reference fails to resolve.
    pub fn decompress_file(&self, input: &Path, output: &Path) -> CsvDictResult<DecompressionReport> {
        let start = Instant::now();

        let file = File::open(input).map_err(|e| CsvDictError::Io(e).at_input(input))?;
        let rows = self.decode_artifact(file).map_err(|e| e.at_input(input))?;

        let file = File::create(output).map_err(|e| CsvDictError::Io(e).at_output(output))?;
        let mut sink = BufWriter::new(file);
        self.codec
            .write_rows(&mut sink, &rows)
            .and_then(|_| sink.flush().map_err(CsvDictError::from))
            .map_err(|e| e.at_output(output))?;

        let report = DecompressionReport {
            rows: rows.len(),
            elapsed: start.elapsed(),
        };
        info!(
            input = %input.display(),
            output = %output.display(),
            rows = report.rows,
            "decompressed"
        );
        Ok(report)
    }
}
