use crate::commands::{to_json, CommandResult, Context, CONTACT_NOT_FOUND};
use crate::util::require_args;
use contactbook_core::dto::UpcomingBirthdayDto;
use contactbook_core::time::format_date;
use contactbook_core::AddressBook;
use tracing::debug;

pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> CommandResult {
    require_args("add-birthday", args, 2)?;
    let Some(record) = book.find_mut(args[0]) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    record.add_birthday(args[1])?;
    Ok("Birthday added.".to_string())
}

pub fn show_birthday(book: &AddressBook, args: &[&str]) -> CommandResult {
    require_args("show-birthday", args, 1)?;
    let name = args[0];
    let Some(record) = book.find(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    match record.birthday() {
        Some(birthday) => Ok(format!("{name}'s birthday: {birthday}")),
        None => Ok("Birthday not set.".to_string()),
    }
}

pub fn upcoming(ctx: &Context<'_>, book: &AddressBook) -> CommandResult {
    let today = ctx.today();
    let window = &ctx.config.birthdays;
    let upcoming = book.upcoming_birthdays(today, window);
    debug!(
        today = %format_date(today),
        window_days = window.days,
        matches = upcoming.len(),
        "upcoming birthdays computed"
    );

    if ctx.json {
        let dtos: Vec<UpcomingBirthdayDto> =
            upcoming.iter().map(UpcomingBirthdayDto::from).collect();
        return to_json(&dtos);
    }
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays this week.".to_string());
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    for item in &upcoming {
        lines.push(format!(
            "{} - {}",
            item.name,
            format_date(item.congratulation_date)
        ));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{add_birthday, show_birthday, upcoming};
    use crate::commands::{CommandError, Context};
    use chrono::NaiveDate;
    use contactbook_config::AppConfig;
    use contactbook_core::{AddressBook, CoreError, Record};

    fn book_with(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            book.add_or_replace(Record::new(name).unwrap());
        }
        book
    }

    fn ctx(config: &AppConfig, json: bool) -> Context<'_> {
        Context {
            // Monday
            today: NaiveDate::from_ymd_opt(2024, 6, 10),
            json,
            config,
        }
    }

    #[test]
    fn add_and_show_birthday() {
        let mut book = book_with(&["Alice"]);
        assert_eq!(
            show_birthday(&book, &["Alice"]).unwrap(),
            "Birthday not set."
        );
        assert_eq!(
            add_birthday(&mut book, &["Alice", "15.06.1990"]).unwrap(),
            "Birthday added."
        );
        assert_eq!(
            show_birthday(&book, &["Alice"]).unwrap(),
            "Alice's birthday: 15.06.1990"
        );
        assert_eq!(
            add_birthday(&mut book, &["Bob", "15.06.1990"]).unwrap(),
            "Contact not found."
        );
    }

    #[test]
    fn add_birthday_rejects_bad_dates() {
        let mut book = book_with(&["Alice"]);
        for raw in ["31.02.2024", "2024-02-29", "1.6.1990"] {
            let err = add_birthday(&mut book, &["Alice", raw]).unwrap_err();
            assert!(matches!(err, CommandError::Core(CoreError::InvalidBirthday)));
            assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
        }
        assert!(add_birthday(&mut book, &["Alice", "29.02.2024"]).is_ok());
    }

    #[test]
    fn upcoming_lists_shifted_dates() {
        let config = AppConfig::default();
        let mut book = book_with(&["Alice", "Bob", "Carol"]);
        add_birthday(&mut book, &["Alice", "15.06.1990"]).unwrap();
        add_birthday(&mut book, &["Bob", "12.06.1985"]).unwrap();
        add_birthday(&mut book, &["Carol", "30.06.1985"]).unwrap();

        assert_eq!(
            upcoming(&ctx(&config, false), &book).unwrap(),
            "Upcoming birthdays:\nAlice - 17.06.2024\nBob - 12.06.2024"
        );
    }

    #[test]
    fn upcoming_reports_empty_week() {
        let config = AppConfig::default();
        let book = book_with(&["Alice"]);
        assert_eq!(
            upcoming(&ctx(&config, false), &book).unwrap(),
            "No upcoming birthdays this week."
        );
    }

    #[test]
    fn upcoming_emits_json_when_requested() {
        let config = AppConfig::default();
        let mut book = book_with(&["Alice"]);
        add_birthday(&mut book, &["Alice", "16.06.1990"]).unwrap();

        let output = upcoming(&ctx(&config, true), &book).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value[0]["name"], "Alice");
        assert_eq!(value[0]["congratulation_date"], "17.06.2024");
        assert_eq!(value[0]["days_until"], 6);
    }
}
