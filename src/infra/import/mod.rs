pub mod csv;
pub mod xlsx;

use std::collections::HashSet;

use crate::domain::entities::table::{ParseOutcome, Table};

const EMPTY_HEADER: &str = "__EMPTY";

/// Names the columns from the header row. Blank headers become `__EMPTY`,
/// repeated names get a `_1`, `_2`, ... suffix.
pub fn header_names(cells: &[String]) -> Vec<String> {
    let mut used = HashSet::new();
    cells
        .iter()
        .map(|cell| {
            let base = if cell.trim().is_empty() {
                EMPTY_HEADER.to_string()
            } else {
                cell.clone()
            };
            let mut name = base.clone();
            let mut counter = 0;
            while used.contains(&name) {
                counter += 1;
                name = format!("{base}_{counter}");
            }
            used.insert(name.clone());
            name
        })
        .collect()
}

fn is_blank(record: &[String]) -> bool {
    record.iter().all(|value| value.is_empty())
}

/// First record is the header; blank records after it are not data rows.
pub fn outcome_from_records(records: Vec<Vec<String>>) -> ParseOutcome {
    let mut records = records.into_iter();
    let Some(header) = records.next() else {
        return ParseOutcome::Empty;
    };
    let columns = header_names(&header);
    let data = records.filter(|record| !is_blank(record)).collect();
    ParseOutcome::from_table(Table::from_records(columns, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn blank_headers_are_numbered() {
        let names = header_names(&strings(&["a", "", " ", "b"]));

        assert_eq!(names, strings(&["a", "__EMPTY", "__EMPTY_1", "b"]));
    }

    #[test]
    fn duplicate_headers_get_suffixes() {
        let names = header_names(&strings(&["id", "id", "id", "id_1"]));

        assert_eq!(names, strings(&["id", "id_1", "id_2", "id_1_1"]));
    }

    #[test]
    fn header_only_records_are_empty() {
        let outcome = outcome_from_records(vec![strings(&["a", "b"])]);

        assert_eq!(outcome, ParseOutcome::Empty);
    }

    #[test]
    fn blank_rows_are_skipped() {
        let outcome = outcome_from_records(vec![
            strings(&["a", "b"]),
            strings(&["", ""]),
            strings(&["1", "2"]),
        ]);

        let ParseOutcome::Table(table) = outcome else {
            panic!("expected a table, got {outcome:?}");
        };
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].get("b"), Some("2"));
    }
}
