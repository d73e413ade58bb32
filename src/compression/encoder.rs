/// Cell substitution against a conversion map
///
/// The encoder must be given a map built from the same table (or one with the
/// same per-column vocabulary). A value missing from the map is a caller
/// error; it is logged and kept as a literal rather than aborting the run.
use crate::compression::map::ConversionMap;
use crate::compression::types::{is_eligible, CodedReference, EncodedCell, Row, Table};
use std::collections::HashMap;
use tracing::warn;

/// Replaces eligible cells with coded references
pub struct Encoder<'m> {
    map: &'m ConversionMap,
    /// value -> position, per column
    positions: HashMap<usize, HashMap<&'m str, usize>>,
}

impl<'m> Encoder<'m> {
    /// Indexes the map for constant-time lookups
    pub fn new(map: &'m ConversionMap) -> Self {
        let positions: HashMap<usize, HashMap<&'m str, usize>> = map
            .iter()
            .map(|(column, values)| {
                let index: HashMap<&'m str, usize> = values
                    .iter()
                    .enumerate()
                    .map(|(position, value)| (value.as_str(), position))
                    .collect();
                (column, index)
            })
            .collect();

        Self { map, positions }
    }

    /// The map this encoder substitutes against
    pub fn map(&self) -> &'m ConversionMap {
        self.map
    }

    /// Classifies one cell
    pub fn encode_cell<'v>(&self, column: usize, value: &'v str) -> EncodedCell<'v> {
        if !is_eligible(value) {
            return EncodedCell::Literal(value);
        }

        match self.positions.get(&column).and_then(|p| p.get(value)) {
            Some(&index) => EncodedCell::Reference(CodedReference::new(column, index)),
            None => {
                warn!(column, value, "value missing from conversion map; kept as literal");
                EncodedCell::Literal(value)
            }
        }
    }

    /// Encodes one row into its textual transformed form
    pub fn encode_row<S: AsRef<str>>(&self, row: &[S]) -> Row {
        row.iter()
            .enumerate()
            .map(|(column, cell)| self.encode_cell(column, cell.as_ref()).to_string())
            .collect()
    }

    /// Encodes every row of a table
    pub fn encode_table<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Table {
        rows.iter().map(|row| self.encode_row(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::builder::MapBuilder;

    fn fruit_map() -> ConversionMap {
        ConversionMap::from_columns([(
            0,
            vec!["apple".to_string(), "banana".to_string(), "cherry".to_string()],
        )])
        .unwrap()
    }

    #[test]
    fn test_encode_reference() {
        let map = fruit_map();
        let encoder = Encoder::new(&map);
        assert_eq!(
            encoder.encode_cell(0, "banana"),
            EncodedCell::Reference(CodedReference::new(0, 1))
        );
        assert_eq!(encoder.encode_row(&["banana"]), vec!["&1"]);
    }

    #[test]
    fn test_short_cells_untouched() {
        let map = fruit_map();
        let encoder = Encoder::new(&map);
        assert_eq!(encoder.encode_row(&["", "hi", "x"]), vec!["", "hi", "x"]);
    }

    #[test]
    fn test_short_marker_cells_escaped() {
        let map = fruit_map();
        let encoder = Encoder::new(&map);
        assert_eq!(encoder.encode_row(&["&5", "&"]), vec!["&&5", "&&"]);
    }

    #[test]
    fn test_missing_value_kept_as_literal() {
        let map = fruit_map();
        let encoder = Encoder::new(&map);
        assert_eq!(encoder.encode_cell(0, "durian"), EncodedCell::Literal("durian"));
        // Same value in a column without a list
        assert_eq!(encoder.encode_cell(1, "apple"), EncodedCell::Literal("apple"));
        assert_eq!(encoder.encode_row(&["&durian"]), vec!["&&durian"]);
    }

    #[test]
    fn test_encode_table_with_built_map() {
        let rows = vec![
            vec!["apple", "NY", "hello world"],
            vec!["banana", "CA", "hello world"],
            vec!["apple", "NY"],
        ];
        let map = MapBuilder::build(&rows);
        let encoded = Encoder::new(&map).encode_table(&rows);
        assert_eq!(
            encoded,
            vec![
                vec!["&0", "NY", "&0"],
                vec!["&1", "CA", "&0"],
                vec!["&0", "NY"],
            ]
        );
    }
}
