/// Reference resolution against a conversion map
use crate::common::error::CsvDictResult;
use crate::compression::map::ConversionMap;
use crate::compression::types::{EncodedCell, Row, Table};

/// Restores literal values from coded references
pub struct Decoder<'m> {
    map: &'m ConversionMap,
}

impl<'m> Decoder<'m> {
    pub fn new(map: &'m ConversionMap) -> Self {
        Self { map }
    }

    /// Decodes one transformed cell
    pub fn decode_cell(&self, column: usize, raw: &str) -> CsvDictResult<String> {
        match EncodedCell::parse(column, raw)? {
            EncodedCell::Literal(s) => Ok(s.to_string()),
            EncodedCell::Reference(reference) => Ok(self.map.resolve(reference)?.to_string()),
        }
    }

    /// Decodes one row; `row_number` only labels errors
    pub fn decode_row<S: AsRef<str>>(&self, row_number: usize, row: &[S]) -> CsvDictResult<Row> {
        row.iter()
            .enumerate()
            .map(|(column, cell)| self.decode_cell(column, cell.as_ref()))
            .collect::<CsvDictResult<Row>>()
            .map_err(|e| e.in_row(row_number))
    }

    /// Decodes every row, stopping at the first corrupt cell
    pub fn decode_table<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> CsvDictResult<Table> {
        rows.iter()
            .enumerate()
            .map(|(row_number, row)| self.decode_row(row_number, row))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::CsvDictError;

    fn fruit_map() -> ConversionMap {
        ConversionMap::from_columns([(
            0,
            vec!["apple".to_string(), "banana".to_string(), "cherry".to_string()],
        )])
        .unwrap()
    }

    #[test]
    fn test_decode_reference() {
        let map = fruit_map();
        let decoder = Decoder::new(&map);
        assert_eq!(decoder.decode_cell(0, "&1").unwrap(), "banana");
        assert_eq!(decoder.decode_row(0, &["&2", "NY"]).unwrap(), vec!["cherry", "NY"]);
    }

    #[test]
    fn test_decode_literals_and_escapes() {
        let map = fruit_map();
        let decoder = Decoder::new(&map);
        assert_eq!(
            decoder.decode_row(0, &["hi", "", "&&5", "&&"]).unwrap(),
            vec!["hi", "", "&5", "&"]
        );
    }

    #[test]
    fn test_out_of_range_is_corrupt() {
        let map = fruit_map();
        let decoder = Decoder::new(&map);
        let err = decoder.decode_row(3, &["&99"]).unwrap_err();
        assert!(matches!(err, CsvDictError::CorruptData(_)));
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_unknown_column_is_corrupt() {
        let map = fruit_map();
        let decoder = Decoder::new(&map);
        let err = decoder.decode_row(0, &["apple", "&0"]).unwrap_err();
        assert!(matches!(err, CsvDictError::CorruptData(_)));
    }

    #[test]
    fn test_bad_suffix_is_corrupt() {
        let map = fruit_map();
        let decoder = Decoder::new(&map);
        for raw in ["&", "&one", "&1.5"] {
            assert!(matches!(
                decoder.decode_cell(0, raw),
                Err(CsvDictError::CorruptData(_))
            ));
        }
    }

    #[test]
    fn test_decode_table_stops_at_first_error() {
        let map = fruit_map();
        let decoder = Decoder::new(&map);
        let rows = vec![vec!["&0"], vec!["&7"], vec!["&x"]];
        let err = decoder.decode_table(&rows).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
