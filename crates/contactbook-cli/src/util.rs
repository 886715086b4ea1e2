use crate::commands::CommandError;
use chrono::NaiveDate;
use contactbook_core::time::{parse_date, TimeParseError};

pub fn parse_today(raw: &str) -> Result<NaiveDate, TimeParseError> {
    parse_date(raw.trim())
}

/// Splits a line into a command token and its arguments.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}

pub fn require_args(
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), CommandError> {
    if args.len() < expected {
        return Err(CommandError::ArgumentCount { command, expected });
    }
    Ok(())
}
