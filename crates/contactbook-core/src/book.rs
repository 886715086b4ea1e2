use crate::domain::Record;
use crate::rules::birthdays::{upcoming_birthdays, BirthdayWindow, UpcomingBirthday};
use chrono::NaiveDate;

/// In-memory contacts keyed by exact name text, kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its name. An existing record with the same name
    /// is replaced in place, so it keeps its position.
    pub fn add_or_replace(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.name().as_str() == name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let idx = self.position(name)?;
        Some(self.records.remove(idx))
    }

    pub fn all_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window: &BirthdayWindow,
    ) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.all_records(), today, window)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}
