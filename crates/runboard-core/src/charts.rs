use runboard_parser::RunRecord;
use serde::Serialize;

use crate::metrics::PersonMetricsMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatePoint {
    pub date: String,
    pub miles: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPoint {
    pub person: String,
    pub total_miles: f64,
    pub average_miles: f64,
    pub runs: usize,
}

/// Series for the distance-over-time line and the two per-person bar charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub distance_over_time: Vec<DatePoint>,
    pub per_person: Vec<PersonPoint>,
}

impl ChartData {
    pub fn build(records: &[RunRecord], person_metrics: &PersonMetricsMap) -> Self {
        Self {
            distance_over_time: distance_over_time(records),
            per_person: per_person_series(person_metrics),
        }
    }
}

/// One point per run, ordered by date. Runs on the same date keep upload order.
pub fn distance_over_time(records: &[RunRecord]) -> Vec<DatePoint> {
    let mut points: Vec<DatePoint> = records
        .iter()
        .map(|run| DatePoint {
            date: run.date.clone(),
            miles: run.miles,
        })
        .collect();
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}

pub fn per_person_series(person_metrics: &PersonMetricsMap) -> Vec<PersonPoint> {
    person_metrics
        .iter()
        .map(|(person, metrics)| PersonPoint {
            person: person.to_string(),
            total_miles: metrics.total_miles,
            average_miles: metrics.average_miles,
            runs: metrics.total_runs,
        })
        .collect()
}
