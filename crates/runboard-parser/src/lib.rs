pub mod errors;
pub mod fields;
pub mod model;
mod reader;

pub use errors::ValidationError;
pub use fields::{is_iso_date_shape, parse_miles_prefix};
pub use model::RunRecord;
pub use reader::parse_runs;

#[cfg(test)]
mod tests;
