//! CSV row codec
//!
//! Reads and writes rows as ordered text cells. There is no header handling:
//! a header line is just another row. Rows may differ in length.

use crate::codec::config::CodecConfig;
use crate::codec::RowCodec;
use crate::common::error::CsvDictResult;
use crate::compression::types::{Row, Table};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::{Read, Write};

/// CSV implementation of [`RowCodec`] backed by the `csv` crate
#[derive(Debug, Clone, Default)]
pub struct CsvRowCodec {
    config: CodecConfig,
}

impl CsvRowCodec {
    /// Create a codec with the given settings
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.config.delimiter)
            .quote(self.config.quote);
        builder
    }

    fn writer_builder(&self) -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.config.delimiter)
            .quote(self.config.quote);
        builder
    }
}

impl RowCodec for CsvRowCodec {
    fn read_rows(&self, source: &mut dyn Read) -> CsvDictResult<Table> {
        let mut reader = self.reader_builder().from_reader(source);
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect::<Row>());
        }
        Ok(rows)
    }

    fn write_rows(&self, sink: &mut dyn Write, rows: &[Row]) -> CsvDictResult<()> {
        let mut writer = self.writer_builder().from_writer(sink);
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}
