pub mod birthdays;

pub use birthdays::{
    next_anniversary, shift_off_weekend, upcoming_birthdays, validate_window_days,
    BirthdayWindow, LeapDayPolicy, UpcomingBirthday, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
