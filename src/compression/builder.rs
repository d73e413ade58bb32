/// Conversion map construction
///
/// One pass over the table tallies how often each value occurs in each column.
/// Values of two characters or fewer are not counted at all. Each column's
/// values are then ranked by count, most frequent first, with ties kept in
/// first-seen order so identical input always yields an identical map.
use crate::compression::map::ConversionMap;
use crate::compression::types::is_eligible;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Occurrence counts for one column, in first-seen order
#[derive(Debug, Default)]
struct ColumnTally {
    slots: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl ColumnTally {
    fn observe(&mut self, value: &str) {
        match self.slots.get(value) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    /// Consumes the tally, returning values by descending count
    fn rank(self) -> Vec<String> {
        let mut entries = self.entries;
        // Vec::sort_by is stable: equal counts keep first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
            .into_iter()
            .map(|(value, _)| value)
            .filter(|value| !value.is_empty())
            .collect()
    }
}

/// Incremental conversion map builder
///
/// Feed every row with [`MapBuilder::observe_row`], then call
/// [`MapBuilder::finish`]. Dropping the builder early discards all state.
#[derive(Debug, Default)]
pub struct MapBuilder {
    columns: Vec<ColumnTally>,
    rows_seen: usize,
}

impl MapBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map for a whole table in one call
    pub fn build<S: AsRef<str>>(rows: &[Vec<S>]) -> ConversionMap {
        let mut builder = Self::new();
        for row in rows {
            builder.observe_row(row);
        }
        builder.finish()
    }

    /// Counts the eligible cells of one row
    pub fn observe_row<S: AsRef<str>>(&mut self, row: &[S]) {
        self.rows_seen += 1;
        for (column, cell) in row.iter().enumerate() {
            let value = cell.as_ref();
            if !is_eligible(value) {
                continue;
            }
            if column >= self.columns.len() {
                self.columns.resize_with(column + 1, ColumnTally::default);
            }
            self.columns[column].observe(value);
        }
    }

    /// Number of rows observed so far
    pub fn rows_seen(&self) -> usize {
        self.rows_seen
    }

    /// Ranks every column and produces the map
    pub fn finish(self) -> ConversionMap {
        let rows_seen = self.rows_seen;
        let mut ranked = BTreeMap::new();

        for (column, tally) in self.columns.into_iter().enumerate() {
            if tally.entries.is_empty() {
                continue;
            }
            let values = tally.rank();
            if !values.is_empty() {
                ranked.insert(column, values);
            }
        }

        let map = ConversionMap::from_ranked(ranked);
        debug!(
            rows = rows_seen,
            columns = map.column_count(),
            values = map.value_count(),
            "built conversion map"
        );
        map
    }
}
