pub mod charts;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod table;
pub mod upload;

pub use runboard_parser::{RunRecord, ValidationError};
