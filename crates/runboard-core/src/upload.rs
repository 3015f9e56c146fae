use tracing::warn;

use crate::error::{Result, UploadError};
use crate::pipeline::{process, PipelineOutput};

pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// A file handed over by the user, before anything has looked inside it.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub media_type: Option<String>,
    pub contents: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, media_type: Option<String>, contents: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type,
            contents,
        }
    }

    /// Accepts a `text/csv` media type or a name ending in `.csv`.
    pub fn is_csv(&self) -> bool {
        self.media_type.as_deref() == Some(CSV_MEDIA_TYPE) || self.name.ends_with(".csv")
    }

    pub fn ensure_csv(&self) -> Result<()> {
        if self.is_csv() {
            Ok(())
        } else {
            warn!(name = %self.name, media_type = ?self.media_type, "rejected non-CSV upload");
            Err(UploadError::NotCsv {
                name: self.name.clone(),
            })
        }
    }
}

pub fn process_upload(file: &UploadFile) -> Result<PipelineOutput> {
    file.ensure_csv()?;
    Ok(process(&file.contents)?)
}
