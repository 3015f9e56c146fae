use runboard_parser::RunRecord;
use tracing::debug;

use crate::error::{Result, UploadError};
use crate::metrics::{OverallMetrics, PersonMetricsMap};
use crate::pipeline::{process, PipelineOutput};
use crate::upload::UploadFile;

/// What a front end shows: the latest accepted upload plus any notice from
/// the latest rejected one.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub records: Vec<RunRecord>,
    pub overall: OverallMetrics,
    pub person_metrics: PersonMetricsMap,
    pub error: Option<String>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files that are not CSV are turned away before any state changes.
    /// Otherwise a success replaces all data and a validation failure only
    /// sets the notice, leaving the previous upload on screen.
    pub fn handle_upload(&mut self, file: &UploadFile) -> Result<()> {
        file.ensure_csv()?;
        self.error = None;

        match process(&file.contents) {
            Ok(output) => {
                self.apply(output);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(UploadError::Validation(err))
            }
        }
    }

    fn apply(&mut self, output: PipelineOutput) {
        debug!(records = output.records.len(), "replacing dashboard data");
        self.records = output.records;
        self.overall = output.overall;
        self.person_metrics = output.person_metrics;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn has_data(&self) -> bool {
        !self.records.is_empty()
    }
}
