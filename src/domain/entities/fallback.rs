use once_cell::sync::Lazy;

use crate::domain::entities::table::{Row, Table};

const FALLBACK_COLUMNS: [&str; 4] = ["when", "what", "why", "how"];

const FALLBACK_RECORDS: [[&str; 4]; 10] = [
    ["when", "what", "why", "how"],
    ["1", "/images?q=tbn:ANd9GcSbJ1NbjtE2rsZQVjEgleauhgZ...", "www.google.com", "HTTPS"],
    ["21-42", "/images?q=tbn:ANd9GcQWeKqtGea_1-W-88L1mQ6YLhg...", "n1.gstatic.com", "HTTS"],
    ["21-40", "/images?q=tbn:ANd9GcQ75fPLdTYJqwWjXqJVhNuGysaz...", "n1.gstatic.com", "HTTPS"],
    ["21-38", "/images?q=tbn:ANd9GcQe01CdDpr-SRtLWiku1MCRawaA...", "nts.google.com", "HTTP"],
    ["24-35", "/images?q=tbn:ANd9GcTCQkG3deKzil02DsJJ8d9ikad9...", "n1.gstatic.com", "HTTPS"],
    ["26-35", "/images?q=tbn:ANd9GcTCQkG3deKzil02DsJJ8d9ikad9...", "n1.gstatic.com", "HTTPS"],
    ["22-35", "/images?q=tbn:ANd9GcTCQkG3deKzil02DsJJ8d9ikad9...", "n1.gstatic.com", "HTTPS"],
    ["22-35", "/images?q=tbn:ANd9GcTCQkG3deKzil02DsJJ8d9ikad9...", "n1.gstatic.com", "HTTPS"],
    ["23-35", "/images?q=tbn:ANd9GcTCQkG3deKzil02DsJJ8d9ikad9...", "n1.gstatic.com", "HTTPS"],
];

static FALLBACK_TABLE: Lazy<Table> = Lazy::new(|| {
    let rows = FALLBACK_RECORDS
        .iter()
        .map(|record| Row::from_pairs(FALLBACK_COLUMNS.into_iter().zip(record.iter().copied())))
        .collect();
    // Every record is zipped with the same columns, so this cannot mismatch.
    Table::from_rows(rows).unwrap_or_default()
});

/// Sample shown whenever an upload yields no data rows.
pub fn fallback_table() -> &'static Table {
    &FALLBACK_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_header_row_and_nine_data_rows() {
        let table = fallback_table();

        assert_eq!(table.len(), 10);
        assert_eq!(table.columns(), FALLBACK_COLUMNS.map(String::from));
        assert_eq!(table.rows()[0].get("when"), Some("when"));
        assert_eq!(table.rows()[4].get("how"), Some("HTTP"));
    }
}
