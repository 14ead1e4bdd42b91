use thiserror::Error;

use crate::domain::entities::table::ParseOutcome;
use crate::domain::entities::upload::FileFormat;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The bytes are not a readable document of the declared format.
    #[error("failed to decode {format} file: {reason}")]
    Decode { format: FileFormat, reason: String },
}

impl ImportError {
    pub fn decode(format: FileFormat, reason: impl ToString) -> Self {
        ImportError::Decode {
            format,
            reason: reason.to_string(),
        }
    }

    pub fn with_format(self, format: FileFormat) -> Self {
        match self {
            ImportError::Decode { reason, .. } => ImportError::Decode { format, reason },
        }
    }
}

/// Turns the bytes of one document into rows of its first sheet.
pub trait SheetDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<ParseOutcome, ImportError>;
}
