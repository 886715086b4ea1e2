use crate::domain::Record;
use crate::error::CoreError;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 366;

/// Where a Feb 29 birthday lands in a year without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    #[default]
    Feb28,
    Mar1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub days: i64,
    pub shift_weekends: bool,
    pub leap_day: LeapDayPolicy,
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            shift_weekends: true,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub anniversary: NaiveDate,
    pub congratulation_date: NaiveDate,
    pub days_until: i64,
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

/// Lists records whose next anniversary is between `today` and
/// `today + window.days`, both ends inclusive. Output follows input order.
pub fn upcoming_birthdays<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    today: NaiveDate,
    window: &BirthdayWindow,
) -> Vec<UpcomingBirthday> {
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?.date();
            let anniversary = next_anniversary(birthday, today, window.leap_day)?;
            let days_until = (anniversary - today).num_days();
            if !(0..=window.days).contains(&days_until) {
                return None;
            }
            let congratulation_date = if window.shift_weekends {
                shift_off_weekend(anniversary)?
            } else {
                anniversary
            };
            Some(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                anniversary,
                congratulation_date,
                days_until,
            })
        })
        .collect()
}

/// First occurrence of the birthday's month and day on or after `today`.
pub fn next_anniversary(
    birthday: NaiveDate,
    today: NaiveDate,
    leap_day: LeapDayPolicy,
) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year(), leap_day)?;
    if this_year < today {
        return anniversary_in(birthday, today.year() + 1, leap_day);
    }
    Some(this_year)
}

/// Saturday and Sunday move to the following Monday.
pub fn shift_off_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

fn anniversary_in(birthday: NaiveDate, year: i32, leap_day: LeapDayPolicy) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() != 2 || birthday.day() != 29 {
            return None;
        }
        match leap_day {
            LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
        }
    })
}
