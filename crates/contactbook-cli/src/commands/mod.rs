use chrono::NaiveDate;
use contactbook_config::AppConfig;
use contactbook_core::time::local_today;
use contactbook_core::{AddressBook, CoreError};
use serde::Serialize;
use thiserror::Error;

pub mod birthdays;
pub mod contacts;

pub type CommandResult = Result<String, CommandError>;

pub struct Context<'a> {
    /// Fixed date for the birthday window; the local date when unset.
    pub today: Option<NaiveDate>,
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("not enough arguments for '{command}': expected {expected}")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
    },
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Help,
    Exit,
}

impl Command {
    pub fn from_token(token: &str) -> Option<Self> {
        let command = match token {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "remove-phone" => Command::RemovePhone,
            "delete" => Command::Delete,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => return None,
        };
        Some(command)
    }

    pub fn ends_session(self) -> bool {
        matches!(self, Command::Exit)
    }
}

pub const INVALID_COMMAND: &str = "Invalid command.";
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

const HELP: &str = "\
Commands:
  hello
  add <name> <phone>
  change <name> <old_phone> <new_phone>
  phone <name>
  remove-phone <name> <phone>
  delete <name>
  all
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  birthdays
  close | exit";

pub fn execute(
    ctx: &Context<'_>,
    book: &mut AddressBook,
    command: Command,
    args: &[&str],
) -> CommandResult {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => contacts::add_contact(book, args),
        Command::Change => contacts::change_contact(book, args),
        Command::Phone => contacts::show_phones(book, args),
        Command::All => contacts::show_all(ctx, book),
        Command::RemovePhone => contacts::remove_phone(book, args),
        Command::Delete => contacts::delete_contact(book, args),
        Command::AddBirthday => birthdays::add_birthday(book, args),
        Command::ShowBirthday => birthdays::show_birthday(book, args),
        Command::Birthdays => birthdays::upcoming(ctx, book),
        Command::Help => Ok(HELP.to_string()),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

pub fn to_json<T: Serialize>(value: &T) -> CommandResult {
    Ok(serde_json::to_string_pretty(value)?)
}
