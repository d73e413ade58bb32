/// Conversion map: per-column frequency-ranked value lists
///
/// Column `i` maps to the distinct literals observed in that column, most
/// frequent first. A coded reference `&k` in column `i` stands for entry `k`
/// of that list. Columns that never held a substitutable value have no entry.
///
/// The persisted form is a single-line JSON object keyed by column number:
///
/// ```text
/// {"0":["apple","banana","cherry"],"2":["hello world"]}
/// ```
use crate::common::error::{CsvDictError, CsvDictResult};
use crate::compression::types::CodedReference;
use crate::corrupt_err;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Immutable per-column reference tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionMap {
    columns: BTreeMap<usize, Vec<String>>,
}

impl ConversionMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map from explicit column lists, checking its invariants
    pub fn from_columns<I>(columns: I) -> CsvDictResult<Self>
    where
        I: IntoIterator<Item = (usize, Vec<String>)>,
    {
        let map = Self {
            columns: columns.into_iter().collect(),
        };
        map.validate()?;
        Ok(map)
    }

    /// Builder-side constructor; lists are already distinct and non-empty
    pub(crate) fn from_ranked(columns: BTreeMap<usize, Vec<String>>) -> Self {
        Self { columns }
    }

    /// Ordered values for a column, if it has an entry
    pub fn column(&self, column: usize) -> Option<&[String]> {
        self.columns.get(&column).map(Vec::as_slice)
    }

    /// Iterates `(column, values)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.columns.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    /// Number of columns with an entry
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of values across all columns
    pub fn value_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Looks up the literal a reference stands for
    pub fn resolve(&self, reference: CodedReference) -> CsvDictResult<&str> {
        let values = self
            .columns
            .get(&reference.column)
            .ok_or_else(|| corrupt_err!("column {} has no conversion list", reference.column))?;

        values.get(reference.index).map(String::as_str).ok_or_else(|| {
            corrupt_err!(
                "reference {} out of range for column {} ({} entries)",
                reference,
                reference.column,
                values.len()
            )
        })
    }

    /// Checks that no list holds the empty string or a duplicate value
    pub fn validate(&self) -> CsvDictResult<()> {
        for (column, values) in &self.columns {
            let mut seen = HashSet::with_capacity(values.len());
            for value in values {
                if value.is_empty() {
                    return Err(corrupt_err!("column {} lists an empty value", column));
                }
                if !seen.insert(value.as_str()) {
                    return Err(corrupt_err!(
                        "column {} lists '{}' more than once",
                        column,
                        value
                    ));
                }
            }
        }
        Ok(())
    }

    /// Serializes to the single-line JSON form
    pub fn to_json(&self) -> CsvDictResult<String> {
        serde_json::to_string(self).map_err(|e| CsvDictError::Serialization(e.to_string()))
    }

    /// Parses the single-line JSON form
    pub fn from_json(text: &str) -> CsvDictResult<Self> {
        let map: ConversionMap = serde_json::from_str(text)
            .map_err(|e| corrupt_err!("malformed conversion map: {}", e))?;
        map.validate()?;
        Ok(map)
    }
}
