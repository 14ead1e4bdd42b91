use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::table::ParseOutcome;
use crate::domain::entities::upload::{FileFormat, RawFile};
use crate::infra::import::csv::CsvDecoder;
use crate::infra::import::xlsx::WorkbookDecoder;
use crate::usecase::ports::decoder::{ImportError, SheetDecoder};

pub struct ImportService {
    workbook: Arc<dyn SheetDecoder>,
    csv: Arc<dyn SheetDecoder>,
}

impl ImportService {
    pub fn new() -> Self {
        Self::with_decoders(
            Arc::new(WorkbookDecoder::new(FileFormat::Xlsx)),
            Arc::new(CsvDecoder),
        )
    }

    pub fn with_decoders(workbook: Arc<dyn SheetDecoder>, csv: Arc<dyn SheetDecoder>) -> Self {
        Self { workbook, csv }
    }

    pub fn parse(&self, file: &RawFile) -> Result<ParseOutcome, ImportError> {
        let result = if file.format.is_workbook() {
            self.workbook
                .decode(&file.bytes)
                .map_err(|err| err.with_format(file.format))
        } else {
            self.csv.decode(&file.bytes)
        };

        match &result {
            Ok(outcome) => info!(
                file = %file.name,
                format = %file.format,
                bytes = file.bytes.len(),
                rows = outcome.row_count(),
                "parsed upload"
            ),
            Err(err) => warn!(file = %file.name, error = %err, "upload rejected"),
        }
        result
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::table::Table;

    struct FixedDecoder(Result<ParseOutcome, ImportError>);

    impl SheetDecoder for FixedDecoder {
        fn decode(&self, _bytes: &[u8]) -> Result<ParseOutcome, ImportError> {
            self.0.clone()
        }
    }

    fn one_row_table() -> ParseOutcome {
        ParseOutcome::Table(Table::from_records(
            vec!["a".to_string()],
            vec![vec!["1".to_string()]],
        ))
    }

    #[test]
    fn routes_by_declared_format() {
        let service = ImportService::with_decoders(
            Arc::new(FixedDecoder(Ok(one_row_table()))),
            Arc::new(FixedDecoder(Ok(ParseOutcome::Empty))),
        );

        let workbook = service
            .parse(&RawFile::new("book.xlsx", vec![1]))
            .expect("workbook decoder should succeed");
        let csv = service
            .parse(&RawFile::new("data.csv", vec![1]))
            .expect("csv decoder should succeed");

        assert_eq!(workbook.row_count(), 1);
        assert_eq!(csv, ParseOutcome::Empty);
    }

    #[test]
    fn decode_errors_carry_the_declared_format() {
        let service = ImportService::with_decoders(
            Arc::new(FixedDecoder(Err(ImportError::decode(FileFormat::Xlsx, "bad zip")))),
            Arc::new(CsvDecoder),
        );

        let err = service
            .parse(&RawFile::new("legacy.xls", vec![0xD0, 0xCF]))
            .expect_err("decoder failure should propagate");

        assert_eq!(err, ImportError::decode(FileFormat::Xls, "bad zip"));
        assert_eq!(err.to_string(), "failed to decode XLS file: bad zip");
    }
}
