use thiserror::Error;
use tracing::debug;

use crate::domain::entities::fallback::fallback_table;
use crate::domain::entities::grid::{Advisory, DisplayGrid, GridSource, Rendered, GRID_TITLE};
use crate::domain::entities::table::{ParseOutcome, Table};

pub const EMPTY_FILE_TITLE: &str = "Empty file";
pub const EMPTY_FILE_ADVISORY: &str = "Empty file uploaded! Showing dummy data.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Headers come from row 0, so a table without rows has none.
    #[error("table has no rows to derive columns from")]
    NoColumns,
}

pub fn render(input: &ParseOutcome) -> Result<Rendered, RenderError> {
    render_with_fallback(input, fallback_table())
}

/// Renders `input`, substituting `fallback` when the upload has no rows.
pub fn render_with_fallback(
    input: &ParseOutcome,
    fallback: &Table,
) -> Result<Rendered, RenderError> {
    let (table, source) = match input {
        ParseOutcome::Table(table) if !table.is_empty() => (table, GridSource::Uploaded),
        _ => (fallback, GridSource::Fallback),
    };

    let grid = render_table(table)?;
    let advisory = match source {
        GridSource::Uploaded => None,
        GridSource::Fallback => {
            debug!(rows = grid.row_count(), "empty upload, showing fallback table");
            Some(Advisory {
                title: EMPTY_FILE_TITLE.to_string(),
                message: EMPTY_FILE_ADVISORY.to_string(),
            })
        }
    };

    Ok(Rendered {
        grid,
        source,
        advisory,
    })
}

pub fn render_table(table: &Table) -> Result<DisplayGrid, RenderError> {
    let first = table.rows().first().ok_or(RenderError::NoColumns)?;
    let columns = first.keys().to_vec();
    let headers = columns.iter().map(|column| column.to_uppercase()).collect();

    // Every row shares the first row's key list, so iterating a row yields
    // its values in column order.
    let body = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|(_, value)| value.to_string()).collect())
        .collect();

    Ok(DisplayGrid {
        title: GRID_TITLE.to_string(),
        columns,
        headers,
        body,
    })
}
