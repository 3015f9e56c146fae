use std::fs;
use std::path::PathBuf;

use crate::errors::ValidationError;
use crate::fields::{is_iso_date_shape, parse_miles_prefix};
use crate::model::RunRecord;
use crate::parse_runs;

fn fixture(path: &str) -> Vec<u8> {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let full_path = base.join("tests/data").join(path);
    fs::read(&full_path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", full_path.display(), err))
}

#[test]
fn parses_two_people_in_row_order() {
    let records = parse_runs(&fixture("runs_two_people.csv")).expect("parse failed");

    assert_eq!(records.len(), 4);
    assert_eq!(records[0], RunRecord::new("2023-01-15", "John Doe", 3.5));
    assert_eq!(records[1], RunRecord::new("2023-01-16", "Jane Smith", 4.2));
    assert_eq!(records[3].person, "Jane Smith");
    assert_eq!(records[3].miles, 2.8);
}

#[test]
fn matches_columns_by_name_not_position() {
    let records = parse_runs(&fixture("runs_reordered_columns.csv")).expect("parse failed");

    assert_eq!(
        records,
        vec![
            RunRecord::new("2023-01-15", "John", 3.5),
            RunRecord::new("2023-01-16", "John", 4.5),
        ]
    );
}

#[test]
fn missing_column_names_all_required_columns() {
    let err = parse_runs(&fixture("runs_missing_miles_column.csv")).unwrap_err();

    assert!(matches!(err, ValidationError::MissingColumns { ref found } if found == &["date", "person"]));
    let message = err.to_string();
    assert_eq!(message, "CSV must contain columns: date, person, miles");
    for column in ["date", "person", "miles"] {
        assert!(message.contains(column));
    }
}

#[test]
fn empty_input_reports_missing_columns() {
    let err = parse_runs(b"").unwrap_err();
    assert!(matches!(err, ValidationError::MissingColumns { .. }));
}

#[test]
fn header_only_yields_no_records() {
    let records = parse_runs(&fixture("header_only.csv")).expect("parse failed");
    assert!(records.is_empty());
}

#[test]
fn blank_rows_are_skipped() {
    let records = parse_runs(&fixture("runs_blank_rows.csv")).expect("parse failed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].date, "2023-01-16");
}

#[test]
fn bad_date_aborts_with_offending_value() {
    let err = parse_runs(&fixture("runs_bad_date.csv")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid date format: 15-01-2023. Expected YYYY-MM-DD"
    );
    assert_eq!(err.line(), Some(3));
}

#[test]
fn bad_miles_aborts_with_offending_value() {
    let err = parse_runs(&fixture("runs_bad_miles.csv")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid miles value: abc. Must be a number"
    );
    assert_eq!(err.line(), Some(2));
}

#[test]
fn empty_required_cell_is_missing_data() {
    let err = parse_runs(b"date,person,miles\n2023-01-15,,3.5\n").unwrap_err();

    assert_eq!(
        err.to_string(),
        r#"Row missing required data: {"date":"2023-01-15","person":"","miles":"3.5"}"#
    );
}

#[test]
fn short_row_is_missing_data() {
    let err = parse_runs(b"date,person,miles\n2023-01-15,John\n").unwrap_err();

    assert!(matches!(err, ValidationError::MissingField { line: 2, .. }));
    assert_eq!(
        err.to_string(),
        r#"Row missing required data: {"date":"2023-01-15","person":"John"}"#
    );
}

#[test]
fn zero_miles_counts_as_present() {
    let records = parse_runs(b"date,person,miles\n2023-01-15,John,0\n").expect("parse failed");
    assert_eq!(records, vec![RunRecord::new("2023-01-15", "John", 0.0)]);
}

#[test]
fn presence_is_checked_before_date_shape() {
    let err = parse_runs(b"date,person,miles\nnot-a-date,,abc\n").unwrap_err();
    assert!(matches!(err, ValidationError::MissingField { .. }));
}

#[test]
fn date_is_checked_before_miles() {
    let err = parse_runs(b"date,person,miles\n2023/01/15,John,abc\n").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidDate { .. }));
}

#[test]
fn calendar_validity_is_not_checked() {
    let records = parse_runs(b"date,person,miles\n2023-02-30,John,1\n").expect("parse failed");
    assert_eq!(records[0].date, "2023-02-30");
}

#[test]
fn quoted_fields_keep_commas() {
    let records =
        parse_runs(b"date,person,miles\n2023-01-15,\"Doe, John\",\"3.25\"\n").expect("parse failed");
    assert_eq!(records[0].person, "Doe, John");
    assert_eq!(records[0].miles, 3.25);
}

#[test]
fn invalid_utf8_is_a_csv_error() {
    let err = parse_runs(b"date,person,miles\n2023-01-15,J\xffohn,3.5\n").unwrap_err();

    assert!(matches!(err, ValidationError::Csv { .. }));
    assert!(err.to_string().starts_with("Failed to parse CSV: "));
}

#[test]
fn infinite_miles_are_rejected() {
    let err = parse_runs(b"date,person,miles\n2023-01-15,John,Infinity\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid miles value: Infinity. Must be a number"
    );
}

#[test]
fn date_shape_accepts_only_literal_pattern() {
    assert!(is_iso_date_shape("2023-01-15"));
    assert!(is_iso_date_shape("0000-99-99"));
    assert!(!is_iso_date_shape("2023-1-15"));
    assert!(!is_iso_date_shape("2023-01-15T00:00"));
    assert!(!is_iso_date_shape(" 2023-01-15"));
    assert!(!is_iso_date_shape("2023_01_15"));
    assert!(!is_iso_date_shape("２０２３-01-15"));
}

#[test]
fn miles_prefix_follows_leading_number_rules() {
    assert_eq!(parse_miles_prefix("3.5"), Some(3.5));
    assert_eq!(parse_miles_prefix("3.5abc"), Some(3.5));
    assert_eq!(parse_miles_prefix("  4"), Some(4.0));
    assert_eq!(parse_miles_prefix("-2.5"), Some(-2.5));
    assert_eq!(parse_miles_prefix(".75mi"), Some(0.75));
    assert_eq!(parse_miles_prefix("5."), Some(5.0));
    assert_eq!(parse_miles_prefix("1e2"), Some(100.0));
    assert_eq!(parse_miles_prefix("2e"), Some(2.0));
    assert_eq!(parse_miles_prefix("2e+x"), Some(2.0));
    assert_eq!(parse_miles_prefix("1.2.3"), Some(1.2));
    assert_eq!(parse_miles_prefix("Infinity"), Some(f64::INFINITY));
    assert_eq!(parse_miles_prefix("abc"), None);
    assert_eq!(parse_miles_prefix("."), None);
    assert_eq!(parse_miles_prefix("-"), None);
    assert_eq!(parse_miles_prefix(""), None);
}
