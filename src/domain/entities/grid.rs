pub const GRID_TITLE: &str = "Extracted IoT Data";

/// Header and body cells ready for the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGrid {
    pub title: String,
    /// Column identities, in display order.
    pub columns: Vec<String>,
    /// Uppercased column names. Display only.
    pub headers: Vec<String>,
    pub body: Vec<Vec<String>>,
}

impl DisplayGrid {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.body.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.body.get(row)?.get(col).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSource {
    Uploaded,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub grid: DisplayGrid,
    pub source: GridSource,
    pub advisory: Option<Advisory>,
}
