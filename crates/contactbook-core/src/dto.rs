use crate::domain::Record;
use crate::rules::UpcomingBirthday;
use crate::time::format_date;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDto {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for RecordDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|phone| phone.as_str().to_string())
                .collect(),
            birthday: record
                .birthday()
                .map(|birthday| birthday.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthdayDto {
    pub name: String,
    pub congratulation_date: String,
    pub days_until: i64,
}

impl From<&UpcomingBirthday> for UpcomingBirthdayDto {
    fn from(item: &UpcomingBirthday) -> Self {
        Self {
            name: item.name.clone(),
            congratulation_date: format_date(item.congratulation_date),
            days_until: item.days_until,
        }
    }
}
