use crate::commands::{to_json, CommandResult, Context, CONTACT_NOT_FOUND};
use crate::util::require_args;
use contactbook_core::dto::RecordDto;
use contactbook_core::{AddressBook, Record};

/// Creates the contact when missing, then appends the phone. A new contact
/// is kept even if the phone turns out to be invalid.
pub fn add_contact(book: &mut AddressBook, args: &[&str]) -> CommandResult {
    require_args("add", args, 2)?;
    let (name, phone) = (args[0], args[1]);

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_or_replace(Record::new(name)?);
        "Contact added."
    };
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }
    Ok(message.to_string())
}

pub fn change_contact(book: &mut AddressBook, args: &[&str]) -> CommandResult {
    require_args("change", args, 3)?;
    let Some(record) = book.find_mut(args[0]) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    record.edit_phone(args[1], args[2])?;
    Ok("Phone number updated.".to_string())
}

pub fn show_phones(book: &AddressBook, args: &[&str]) -> CommandResult {
    require_args("phone", args, 1)?;
    let name = args[0];
    let Some(record) = book.find(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    let phones = record
        .phones()
        .iter()
        .map(|phone| phone.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("Phone numbers for {name}: {phones}"))
}

pub fn remove_phone(book: &mut AddressBook, args: &[&str]) -> CommandResult {
    require_args("remove-phone", args, 2)?;
    let Some(record) = book.find_mut(args[0]) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    let message = match record.remove_phone(args[1]) {
        0 => "Phone number not found.",
        _ => "Phone number removed.",
    };
    Ok(message.to_string())
}

pub fn delete_contact(book: &mut AddressBook, args: &[&str]) -> CommandResult {
    require_args("delete", args, 1)?;
    let message = match book.delete(args[0]) {
        Some(_) => "Contact deleted.",
        None => CONTACT_NOT_FOUND,
    };
    Ok(message.to_string())
}

pub fn show_all(ctx: &Context<'_>, book: &AddressBook) -> CommandResult {
    if ctx.json {
        let dtos: Vec<RecordDto> = book.all_records().map(RecordDto::from).collect();
        return to_json(&dtos);
    }
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    Ok(book
        .all_records()
        .map(Record::render)
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{add_contact, change_contact, delete_contact, remove_phone, show_all, show_phones};
    use crate::commands::{CommandError, Context};
    use contactbook_config::AppConfig;
    use contactbook_core::{AddressBook, CoreError};

    fn phones(book: &AddressBook, name: &str) -> Vec<String> {
        book.find(name)
            .expect("record")
            .phones()
            .iter()
            .map(|phone| phone.as_str().to_string())
            .collect()
    }

    #[test]
    fn add_twice_appends_phones() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&mut book, &["Alice", "1111111111"]).unwrap(),
            "Contact added."
        );
        assert_eq!(
            add_contact(&mut book, &["Alice", "222-222-2222"]).unwrap(),
            "Contact updated."
        );
        assert_eq!(book.len(), 1);
        assert_eq!(phones(&book, "Alice"), ["1111111111", "2222222222"]);
    }

    #[test]
    fn add_with_invalid_phone_keeps_new_contact() {
        let mut book = AddressBook::new();
        let err = add_contact(&mut book, &["Alice", "12345"]).unwrap_err();
        assert!(matches!(err, CommandError::Core(CoreError::InvalidPhone)));
        assert_eq!(
            err.to_string(),
            "Phone number must contain exactly 10 digits."
        );
        assert!(phones(&book, "Alice").is_empty());
    }

    #[test]
    fn change_reports_missing_contact_and_phone() {
        let mut book = AddressBook::new();
        assert_eq!(
            change_contact(&mut book, &["Alice", "1111111111", "2222222222"]).unwrap(),
            "Contact not found."
        );

        add_contact(&mut book, &["Alice", "1111111111"]).unwrap();
        assert_eq!(
            change_contact(&mut book, &["Alice", "1111111111", "2222222222"]).unwrap(),
            "Phone number updated."
        );
        let err = change_contact(&mut book, &["Alice", "1111111111", "3333333333"]).unwrap_err();
        assert_eq!(err.to_string(), "Old phone number not found.");
    }

    #[test]
    fn phone_lists_numbers() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &["Alice", "1111111111"]).unwrap();
        add_contact(&mut book, &["Alice", "2222222222"]).unwrap();
        assert_eq!(
            show_phones(&book, &["Alice"]).unwrap(),
            "Phone numbers for Alice: 1111111111, 2222222222"
        );
        assert_eq!(show_phones(&book, &["Bob"]).unwrap(), "Contact not found.");
    }

    #[test]
    fn remove_phone_drops_every_match() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &["Alice", "1111111111"]).unwrap();
        add_contact(&mut book, &["Alice", "(111) 111-1111"]).unwrap();
        assert_eq!(
            remove_phone(&mut book, &["Alice", "1111111111"]).unwrap(),
            "Phone number removed."
        );
        assert!(phones(&book, "Alice").is_empty());
        assert_eq!(
            remove_phone(&mut book, &["Alice", "1111111111"]).unwrap(),
            "Phone number not found."
        );
    }

    #[test]
    fn delete_removes_contact() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &["Alice", "1111111111"]).unwrap();
        assert_eq!(
            delete_contact(&mut book, &["Alice"]).unwrap(),
            "Contact deleted."
        );
        assert_eq!(
            delete_contact(&mut book, &["Alice"]).unwrap(),
            "Contact not found."
        );
    }

    #[test]
    fn all_renders_each_record() {
        let config = AppConfig::default();
        let ctx = Context {
            today: None,
            json: false,
            config: &config,
        };
        let mut book = AddressBook::new();
        assert_eq!(show_all(&ctx, &book).unwrap(), "Address book is empty.");

        add_contact(&mut book, &["Alice", "1111111111"]).unwrap();
        add_contact(&mut book, &["Bob", "2222222222"]).unwrap();
        assert_eq!(
            show_all(&ctx, &book).unwrap(),
            "Contact name: Alice, phones: 1111111111\nContact name: Bob, phones: 2222222222"
        );
    }

    #[test]
    fn all_emits_json_when_requested() {
        let config = AppConfig::default();
        let ctx = Context {
            today: None,
            json: true,
            config: &config,
        };
        let mut book = AddressBook::new();
        add_contact(&mut book, &["Alice", "1111111111"]).unwrap();

        let output = show_all(&ctx, &book).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value[0]["name"], "Alice");
        assert_eq!(value[0]["phones"][0], "1111111111");
        assert!(value[0]["birthday"].is_null());
    }
}
