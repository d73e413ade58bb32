//! Compressed artifact layout
//!
//! A compressed file is the conversion map as one line of JSON, a line break,
//! then the transformed rows in the row codec's format. The JSON form never
//! contains a raw line break, so the first line is always the whole map.

use crate::codec::RowCodec;
use crate::common::error::CsvDictResult;
use crate::compression::map::ConversionMap;
use crate::compression::types::{Row, Table};
use crate::corrupt_err;
use std::io::{BufRead, Write};

/// Writes the map line followed by the transformed rows
pub fn write_artifact<C: RowCodec + ?Sized>(
    sink: &mut dyn Write,
    map: &ConversionMap,
    rows: &[Row],
    codec: &C,
) -> CsvDictResult<()> {
    let line = map.to_json()?;
    sink.write_all(line.as_bytes())?;
    sink.write_all(b"\n")?;
    codec.write_rows(sink, rows)
}

/// Reads the map line, then hands the remainder to the row codec
pub fn read_artifact<R: BufRead, C: RowCodec + ?Sized>(
    source: &mut R,
    codec: &C,
) -> CsvDictResult<(ConversionMap, Table)> {
    let mut line = String::new();
    if source.read_line(&mut line)? == 0 {
        return Err(corrupt_err!("missing conversion map"));
    }

    let map = ConversionMap::from_json(line.trim_end_matches(&['\r', '\n'][..]))?;
    let rows = codec.read_rows(source)?;
    Ok((map, rows))
}
