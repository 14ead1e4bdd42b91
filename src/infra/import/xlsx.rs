use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::domain::entities::table::ParseOutcome;
use crate::domain::entities::upload::FileFormat;
use crate::infra::import::outcome_from_records;
use crate::usecase::ports::decoder::{ImportError, SheetDecoder};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.clone(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) | Data::DurationIso(v) => v.clone(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Reads the first sheet of any workbook calamine understands. The declared
/// format only labels errors; the container type is sniffed from the bytes.
#[derive(Debug, Clone, Copy)]
pub struct WorkbookDecoder {
    format: FileFormat,
}

impl WorkbookDecoder {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }
}

impl SheetDecoder for WorkbookDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<ParseOutcome, ImportError> {
        if bytes.is_empty() {
            return Ok(ParseOutcome::Empty);
        }

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|err| ImportError::decode(self.format, err))?;

        let Some(range) = workbook.worksheet_range_at(0) else {
            return Ok(ParseOutcome::Empty);
        };
        let range = range.map_err(|err| ImportError::decode(self.format, err))?;

        let records = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        Ok(outcome_from_records(records))
    }
}
