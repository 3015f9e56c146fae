// crates/runboard-core/src/error.rs

use runboard_parser::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Please upload a CSV file")]
    NotCsv { name: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, UploadError>;
