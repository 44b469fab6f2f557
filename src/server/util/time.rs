//! Date parsing helpers for list filters.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::server::error::validation::ValidationError;

/// Parses a `YYYY-MM-DD` filter into the first instant of that day.
pub fn start_of_day(field: &str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    Ok(parse_date(field, value)?.and_time(NaiveTime::MIN))
}

/// Parses a `YYYY-MM-DD` filter into the last instant of that day, so the day is inclusive.
pub fn end_of_day(field: &str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    let date = parse_date(field, value)?;
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| ValidationError::field(field, "Invalid date"))?;

    Ok(date.and_time(end))
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::field(field, "Date must be in YYYY-MM-DD format"))
}
