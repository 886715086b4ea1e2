use crate::domain::birthday::Birthday;
use crate::domain::name::Name;
use crate::domain::phone::{digits_only, Phone};
use crate::error::CoreError;
use std::fmt;

/// One contact: a fixed name, phones in insertion order and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone; duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes every phone equal to `raw` after stripping non-digits and
    /// returns how many entries went away.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let digits = digits_only(raw);
        let before = self.phones.len();
        self.phones.retain(|phone| !phone.matches_digits(&digits));
        before - self.phones.len()
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let digits = digits_only(old);
        let slot = self
            .phones
            .iter_mut()
            .find(|phone| phone.matches_digits(&digits))
            .ok_or(CoreError::PhoneNotFound)?;
        *slot = Phone::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        let digits = digits_only(raw);
        self.phones.iter().find(|phone| phone.matches_digits(&digits))
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
