use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Name cannot be empty.")]
    InvalidName,
    #[error("Phone number must contain exactly 10 digits.")]
    InvalidPhone,
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday,
    #[error("Old phone number not found.")]
    PhoneNotFound,
    #[error("invalid birthday window: {0} days")]
    InvalidWindowDays(i64),
}
