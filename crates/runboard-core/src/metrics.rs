use std::collections::HashMap;

use runboard_parser::RunRecord;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Round to two decimals, ties broken half-to-even on the exact binary value.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Aggregate statistics over a non-empty set of runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_runs: usize,
    pub total_miles: f64,
    pub average_miles: f64,
    pub min_miles: f64,
    pub max_miles: f64,
}

impl Metrics {
    /// `None` for an empty slice. The average is taken from the rounded total.
    pub fn from_miles(miles: &[f64]) -> Option<Self> {
        if miles.is_empty() {
            return None;
        }

        let total_runs = miles.len();
        let total_miles = round2(miles.iter().fold(0.0, |sum, value| sum + value));
        let average_miles = round2(total_miles / total_runs as f64);
        let min_miles = miles.iter().copied().fold(f64::INFINITY, f64::min);
        let max_miles = miles.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            total_runs,
            total_miles,
            average_miles,
            min_miles,
            max_miles,
        })
    }

    pub fn from_records(records: &[RunRecord]) -> Option<Self> {
        let miles: Vec<f64> = records.iter().map(|run| run.miles).collect();
        Self::from_miles(&miles)
    }
}

/// Metrics over every record of an upload. An empty upload has no metrics
/// and serializes as an empty JSON object rather than a zeroed record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverallMetrics(pub Option<Metrics>);

impl OverallMetrics {
    pub fn get(&self) -> Option<&Metrics> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn total_runs(&self) -> usize {
        self.0.map_or(0, |metrics| metrics.total_runs)
    }
}

impl Serialize for OverallMetrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(metrics) => metrics.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

pub fn calculate_metrics(records: &[RunRecord]) -> OverallMetrics {
    OverallMetrics(Metrics::from_records(records))
}

/// Per-person metrics keyed by name, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonMetricsMap {
    entries: Vec<(String, Metrics)>,
}

impl PersonMetricsMap {
    pub fn get(&self, person: &str) -> Option<&Metrics> {
        self.entries
            .iter()
            .find(|(name, _)| name == person)
            .map(|(_, metrics)| metrics)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Metrics)> {
        self.entries
            .iter()
            .map(|(name, metrics)| (name.as_str(), metrics))
    }

    /// Sum of runs across people; equals the overall run count.
    pub fn total_runs(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, metrics)| metrics.total_runs)
            .sum()
    }
}

impl Serialize for PersonMetricsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, metrics) in &self.entries {
            map.serialize_entry(name, metrics)?;
        }
        map.end()
    }
}

#[derive(Default)]
struct PersonAccumulator {
    order: Vec<String>,
    miles: HashMap<String, Vec<f64>>,
}

impl PersonAccumulator {
    fn push(&mut self, run: &RunRecord) {
        if !self.miles.contains_key(&run.person) {
            self.order.push(run.person.clone());
        }
        self.miles
            .entry(run.person.clone())
            .or_default()
            .push(run.miles);
    }

    fn build(self) -> PersonMetricsMap {
        let entries = self
            .order
            .into_iter()
            .filter_map(|person| {
                let metrics = Metrics::from_miles(self.miles.get(&person)?)?;
                Some((person, metrics))
            })
            .collect();
        PersonMetricsMap { entries }
    }
}

/// Partitions records by exact person name and aggregates each partition.
pub fn per_person_metrics(records: &[RunRecord]) -> PersonMetricsMap {
    let mut acc = PersonAccumulator::default();
    for run in records {
        acc.push(run);
    }
    acc.build()
}
