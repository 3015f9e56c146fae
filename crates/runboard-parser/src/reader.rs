use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::debug;

use crate::errors::ValidationError;
use crate::fields::{is_iso_date_shape, parse_miles_prefix};
use crate::model::RunRecord;

/// Positions of the required columns within the header row.
#[derive(Debug, Clone, Copy)]
struct RunColumns {
    date: usize,
    person: usize,
    miles: usize,
}

impl RunColumns {
    fn locate(header: &StringRecord) -> Result<Self, ValidationError> {
        let position = |name: &str| header.iter().position(|field| field == name);
        match (position("date"), position("person"), position("miles")) {
            (Some(date), Some(person), Some(miles)) => Ok(Self {
                date,
                person,
                miles,
            }),
            _ => Err(ValidationError::MissingColumns {
                found: header.iter().map(str::to_string).collect(),
            }),
        }
    }

    fn cells<'r>(&self, row: &'r StringRecord) -> RawRow<'r> {
        RawRow {
            date: row.get(self.date),
            person: row.get(self.person),
            miles: row.get(self.miles),
        }
    }
}

/// The three required cells of a data row, `None` where a ragged row ends early.
#[derive(Debug, Serialize)]
struct RawRow<'r> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'r str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    person: Option<&'r str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    miles: Option<&'r str>,
}

impl<'r> RawRow<'r> {
    fn is_blank(&self) -> bool {
        [self.date, self.person, self.miles]
            .into_iter()
            .all(|cell| cell.map_or(true, str::is_empty))
    }

    fn present(cell: Option<&'r str>) -> Option<&'r str> {
        cell.filter(|value| !value.is_empty())
    }

    fn into_record(self, line: u64) -> Result<RunRecord, ValidationError> {
        let (Some(date), Some(person), Some(miles_text)) = (
            Self::present(self.date),
            Self::present(self.person),
            Self::present(self.miles),
        ) else {
            let row = serde_json::to_string(&self).unwrap_or_else(|_| format!("{self:?}"));
            return Err(ValidationError::MissingField { line, row });
        };

        if !is_iso_date_shape(date) {
            return Err(ValidationError::InvalidDate {
                line,
                value: date.to_string(),
            });
        }

        let miles = parse_miles_prefix(miles_text)
            .filter(|value| value.is_finite())
            .ok_or_else(|| ValidationError::InvalidMiles {
                line,
                value: miles_text.to_string(),
            })?;

        Ok(RunRecord::new(date, person, miles))
    }
}

/// Parses an uploaded CSV into run records, preserving row order.
///
/// The header row must name `date`, `person` and `miles`; other columns are
/// ignored. Blank lines and rows whose three required cells are all empty
/// are skipped. The first invalid row aborts the whole parse.
pub fn parse_runs(content: &[u8]) -> Result<Vec<RunRecord>, ValidationError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let header = reader.headers().map_err(ValidationError::csv)?.clone();
    let columns = RunColumns::locate(&header)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let row = result.map_err(ValidationError::csv)?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();
        let cells = columns.cells(&row);

        if cells.is_blank() {
            skipped += 1;
            continue;
        }

        records.push(cells.into_record(line)?);
    }

    debug!(
        records = records.len(),
        skipped_blank_rows = skipped,
        "parsed run records"
    );

    Ok(records)
}
