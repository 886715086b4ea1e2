use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

pub const PHONE_DIGITS: usize = 10;

/// Removes every character that is not an ASCII digit. Digits from other
/// scripts are dropped too, so stored numbers are always ASCII.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// A phone number stored as exactly ten digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let digits = digits_only(raw);
        if digits.len() != PHONE_DIGITS {
            return Err(CoreError::InvalidPhone);
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn matches_digits(&self, digits: &str) -> bool {
        self.0 == digits
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}
