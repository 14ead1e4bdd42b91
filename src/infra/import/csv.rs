use csv::StringRecord;

use crate::domain::entities::table::ParseOutcome;
use crate::domain::entities::upload::FileFormat;
use crate::infra::import::outcome_from_records;
use crate::usecase::ports::decoder::{ImportError, SheetDecoder};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDecoder;

fn record_to_strings(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

impl SheetDecoder for CsvDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<ParseOutcome, ImportError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        if bytes.is_empty() {
            return Ok(ParseOutcome::Empty);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| ImportError::decode(FileFormat::Csv, err))?;
            records.push(record_to_strings(&record));
        }

        Ok(outcome_from_records(records))
    }
}
