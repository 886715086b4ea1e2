use chrono::{Local, NaiveDate};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date format: expected DD.MM.YYYY")]
    InvalidDateFormat,
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses `DD.MM.YYYY` with two-digit day and month and a four-digit year.
pub fn parse_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    if input.is_empty() {
        return Err(TimeParseError::Empty);
    }
    if !has_date_shape(input) {
        return Err(TimeParseError::InvalidDateFormat);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| TimeParseError::InvalidDate(input.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// chrono accepts single-digit fields and signed years, so the layout is checked first.
fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}
