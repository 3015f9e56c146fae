use thiserror::Error;

/// Everything that can reject an upload. The rendered message is what the
/// user sees, so each variant's text is fixed.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("CSV must contain columns: date, person, miles")]
    MissingColumns { found: Vec<String> },

    #[error("Row missing required data: {row}")]
    MissingField { line: u64, row: String },

    #[error("Invalid date format: {value}. Expected YYYY-MM-DD")]
    InvalidDate { line: u64, value: String },

    #[error("Invalid miles value: {value}. Must be a number")]
    InvalidMiles { line: u64, value: String },

    #[error("Failed to parse CSV: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
}

impl ValidationError {
    pub(crate) fn csv(source: csv::Error) -> Self {
        ValidationError::Csv { source }
    }

    /// Input line the error refers to, when it refers to one.
    pub fn line(&self) -> Option<u64> {
        match self {
            ValidationError::MissingColumns { .. } => None,
            ValidationError::MissingField { line, .. }
            | ValidationError::InvalidDate { line, .. }
            | ValidationError::InvalidMiles { line, .. } => Some(*line),
            ValidationError::Csv { source } => source.position().map(|pos| pos.line()),
        }
    }
}
