use runboard_parser::{parse_runs, RunRecord, ValidationError};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::metrics::{calculate_metrics, per_person_metrics, OverallMetrics, PersonMetricsMap};

/// Everything one upload produces. Recomputed from scratch on every upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutput {
    pub records: Vec<RunRecord>,
    pub overall: OverallMetrics,
    pub person_metrics: PersonMetricsMap,
}

/// Validate raw CSV bytes and aggregate them. Any invalid row rejects the
/// whole upload; there is no partial result.
pub fn process(raw: &[u8]) -> Result<PipelineOutput, ValidationError> {
    debug!(bytes = raw.len(), "processing run upload");

    let records = match parse_runs(raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(line = ?err.line(), error = %err, "run upload rejected");
            return Err(err);
        }
    };

    let overall = calculate_metrics(&records);
    let person_metrics = per_person_metrics(&records);

    info!(
        records = records.len(),
        people = person_metrics.len(),
        total_miles = ?overall.get().map(|m| m.total_miles),
        "run upload processed"
    );

    Ok(PipelineOutput {
        records,
        overall,
        person_metrics,
    })
}
