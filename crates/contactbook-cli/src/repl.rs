use crate::commands::{execute, Command, Context, INVALID_COMMAND};
use crate::util::parse_input;
use contactbook_core::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Good bye!";

/// Reads commands line by line until `close`/`exit` or end of input. Command
/// failures are printed as `Error: ...` and never end the session.
pub fn run<R: BufRead, W: Write>(ctx: &Context<'_>, input: R, mut output: W) -> io::Result<()> {
    let mut book = AddressBook::new();
    let mut lines = input.lines();
    writeln!(output, "{WELCOME}")?;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("end of input");
            writeln!(output)?;
            writeln!(output, "{FAREWELL}")?;
            break;
        };
        let line = line?;
        let Some((token, args)) = parse_input(&line) else {
            continue;
        };
        let Some(command) = Command::from_token(token) else {
            debug!(token, "unknown command");
            writeln!(output, "{INVALID_COMMAND}")?;
            continue;
        };

        debug!(?command, args = args.len(), "dispatching command");
        match execute(ctx, &mut book, command, &args) {
            Ok(message) => writeln!(output, "{message}")?,
            Err(err) => {
                debug!(?command, error = %err, "command failed");
                writeln!(output, "Error: {err}")?;
            }
        }
        if command.ends_session() {
            break;
        }
    }

    debug!(contacts = book.len(), "session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::commands::Context;
    use chrono::NaiveDate;
    use contactbook_config::AppConfig;

    fn session(input: &str) -> String {
        let config = AppConfig::default();
        let ctx = Context {
            today: NaiveDate::from_ymd_opt(2024, 6, 10),
            json: false,
            config: &config,
        };
        let mut output = Vec::new();
        run(&ctx, input.as_bytes(), &mut output).expect("session");
        String::from_utf8(output).expect("utf8")
    }

    fn replies(output: &str) -> Vec<&str> {
        output
            .split("Enter a command: ")
            .skip(1)
            .map(str::trim)
            .collect()
    }

    #[test]
    fn session_greets_and_exits() {
        let output = session("hello\nexit\nhello\n");
        assert!(output.starts_with("Welcome to the assistant bot!\n"));
        assert_eq!(replies(&output), ["How can I help you?", "Good bye!"]);
    }

    #[test]
    fn errors_are_rendered_and_session_continues() {
        let output = session("add Alice 123\nchange Alice\nphone Alice\nclose\n");
        assert_eq!(
            replies(&output),
            [
                "Error: Phone number must contain exactly 10 digits.",
                "Error: not enough arguments for 'change': expected 3",
                "Phone numbers for Alice:",
                "Good bye!",
            ]
        );
    }

    #[test]
    fn blank_and_unknown_lines() {
        let output = session("\n   \nfly away\nexit\n");
        assert_eq!(replies(&output), ["", "", "Invalid command.", "Good bye!"]);
    }

    #[test]
    fn uppercase_tokens_are_not_commands() {
        let output = session("ADD Alice 1111111111\nEXIT\nhello\nexit\n");
        assert_eq!(
            replies(&output),
            [
                "Invalid command.",
                "Invalid command.",
                "How can I help you?",
                "Good bye!",
            ]
        );
    }

    #[test]
    fn end_of_input_closes_session() {
        let output = session("add Alice 1111111111\n");
        assert_eq!(replies(&output), ["Contact added.", "Good bye!"]);
    }

    #[test]
    fn birthdays_in_session() {
        let output = session(
            "add Alice 1111111111\nadd-birthday Alice 15.06.1990\nbirthdays\nall\nexit\n",
        );
        assert_eq!(
            replies(&output),
            [
                "Contact added.",
                "Birthday added.",
                "Upcoming birthdays:\nAlice - 17.06.2024",
                "Contact name: Alice, phones: 1111111111, birthday: 15.06.1990",
                "Good bye!",
            ]
        );
    }
}
