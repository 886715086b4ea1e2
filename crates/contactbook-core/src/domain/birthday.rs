use crate::error::CoreError;
use crate::time::parse_date;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A birthday parsed from `DD.MM.YYYY`. The input text is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    date: NaiveDate,
    text: String,
}

impl Birthday {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let date = parse_date(raw).map_err(|_| CoreError::InvalidBirthday)?;
        Ok(Self {
            date,
            text: raw.to_string(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Birthday {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}
