use std::cmp::Ordering;

use runboard_parser::RunRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Person,
    Miles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Clicking the active column flips direction; any other column starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if field == self.field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }
}

fn compare(a: &RunRecord, b: &RunRecord, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Person => a.person.cmp(&b.person),
        SortField::Miles => a.miles.partial_cmp(&b.miles).unwrap_or(Ordering::Equal),
    }
}

/// Stable: rows with equal keys stay in upload order in either direction.
pub fn sorted_records(records: &[RunRecord], state: SortState) -> Vec<RunRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, state.field);
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RunRecord> {
        vec![
            RunRecord::new("2023-01-16", "Bo", 4.0),
            RunRecord::new("2023-01-15", "Al", 6.5),
            RunRecord::new("2023-01-16", "Al", 4.0),
        ]
    }

    #[test]
    fn default_sort_is_date_ascending() {
        let sorted = sorted_records(&records(), SortState::default());
        let people: Vec<_> = sorted.iter().map(|r| r.person.as_str()).collect();
        assert_eq!(people, vec!["Al", "Bo", "Al"]);
    }

    #[test]
    fn descending_keeps_ties_in_input_order() {
        let state = SortState::new(SortField::Miles, SortDirection::Desc);
        let sorted = sorted_records(&records(), state);

        assert_eq!(sorted[0].miles, 6.5);
        assert_eq!(sorted[1].person, "Bo");
        assert_eq!(sorted[2].person, "Al");
    }

    #[test]
    fn toggle_flips_same_field_and_resets_new_field() {
        let state = SortState::default().toggle(SortField::Date);
        assert_eq!(state, SortState::new(SortField::Date, SortDirection::Desc));

        let state = state.toggle(SortField::Person);
        assert_eq!(state, SortState::new(SortField::Person, SortDirection::Asc));
    }
}
