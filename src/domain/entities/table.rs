use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("row {row} does not share the column set of the first row")]
    MismatchedColumns { row: usize },
}

/// One spreadsheet line keyed by column name.
///
/// The ordered key list is shared by every row of a table, so column order
/// survives independently of the value map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    keys: Arc<[String]>,
    values: HashMap<String, String>,
}

impl Row {
    /// Builds a row from a shared key list and positional values. Missing
    /// trailing values become `""`, surplus values are dropped.
    pub fn new(keys: Arc<[String]>, values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let values = keys
            .iter()
            .map(|key| (key.clone(), values.next().unwrap_or_default()))
            .collect();
        Self { keys, values }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let (keys, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .unzip();
        Self::new(keys.into(), values)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.keys.iter().map(move |key| {
            let value = self.values.get(key).map(String::as_str).unwrap_or_default();
            (key.as_str(), value)
        })
    }

    fn shares_keys_with(&self, other: &Row) -> bool {
        Arc::ptr_eq(&self.keys, &other.keys) || self.keys == other.keys
    }
}

/// Ordered rows plus the column list taken from the first row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn from_rows(rows: Vec<Row>) -> Result<Self, TableError> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };
        if let Some(row) = rows.iter().position(|row| !row.shares_keys_with(first)) {
            return Err(TableError::MismatchedColumns { row });
        }
        Ok(Self {
            columns: first.keys().to_vec(),
            rows,
        })
    }

    /// Homogeneous by construction: every record is laid over the same keys.
    pub fn from_records(columns: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let keys: Arc<[String]> = columns.into();
        let rows = records
            .into_iter()
            .map(|values| Row::new(keys.clone(), values))
            .collect::<Vec<_>>();
        let columns = if rows.is_empty() {
            Vec::new()
        } else {
            keys.to_vec()
        };
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Result of decoding one upload: either a table or the distinguished
/// "first sheet had no data rows" signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Table(Table),
    Empty,
}

impl ParseOutcome {
    pub fn from_table(table: Table) -> Self {
        if table.is_empty() {
            ParseOutcome::Empty
        } else {
            ParseOutcome::Table(table)
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            ParseOutcome::Table(table) => table.len(),
            ParseOutcome::Empty => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_keeps_insertion_order() {
        let row = Row::from_pairs([("zeta", "1"), ("alpha", "2"), ("mid", "3")]);

        let keys: Vec<&str> = row.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(row.get("alpha"), Some("2"));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn row_pads_short_records() {
        let keys: Arc<[String]> = vec!["a".to_string(), "b".to_string()].into();
        let row = Row::new(keys, vec!["only".to_string()]);

        assert_eq!(row.get("a"), Some("only"));
        assert_eq!(row.get("b"), Some(""));
    }

    #[test]
    fn from_rows_derives_columns_from_first_row() {
        let table = Table::from_rows(vec![
            Row::from_pairs([("a", "1"), ("b", "2")]),
            Row::from_pairs([("a", "3"), ("b", "4")]),
        ])
        .expect("homogeneous rows should build a table");

        assert_eq!(table.columns(), ["a".to_string(), "b".to_string()]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn from_rows_rejects_mismatched_keys() {
        let result = Table::from_rows(vec![
            Row::from_pairs([("a", "1"), ("b", "2")]),
            Row::from_pairs([("a", "3"), ("c", "4")]),
        ]);

        assert_eq!(result, Err(TableError::MismatchedColumns { row: 1 }));
    }

    #[test]
    fn empty_records_have_no_columns() {
        let table = Table::from_records(vec!["a".to_string()], Vec::new());

        assert!(table.is_empty());
        assert!(table.columns().is_empty());
        assert_eq!(ParseOutcome::from_table(table), ParseOutcome::Empty);
    }
}
