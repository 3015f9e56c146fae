use std::fmt;

use serde::{Deserialize, Serialize};

/// One validated data row: a single run by one person on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub date: String,
    pub person: String,
    pub miles: f64,
}

impl RunRecord {
    pub fn new(date: impl Into<String>, person: impl Into<String>, miles: f64) -> Self {
        Self {
            date: date.into(),
            person: person.into(),
            miles,
        }
    }
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.person, self.miles)
    }
}
