//! # Commands Module
//!
//! The line commands that stand in for the screens.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing + dispatch)
//! ├── bill.rs     ◄─── Amount entry, tip and people selection
//! └── summary.rs  ◄─── show, json, picker listings
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  stdin: "people 4"                                                      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  "people 4".parse::<Command>()  ──► Command::People(Some(4))            │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  execute(&mut session, command) ──► Result<Reply, AppError>             │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  stdout: "People: 4"        or     "error [OUT_OF_RANGE]: ..."          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod bill;
pub mod summary;

use std::str::FromStr;

use tracing::debug;

use crate::error::AppError;
use crate::state::BillSession;

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  amount <text>   replace the amount field (e.g. amount 47.89)
  type <keys>     type into the amount field one key at a time
  back            delete the last character of the amount field
  clear           empty the amount field
  tip [n]         pick a tip percentage, or list the offered ones
  people [n]      pick the number of people, or list the choices
  show            print the split
  json            print the split as JSON
  help            print this help
  quit            leave";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Amount(String),
    Type(String),
    Back,
    Clear,
    Tip(Option<u32>),
    People(Option<i64>),
    Show,
    Json,
    Help,
    Quit,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep going.
    Output(String),
    /// End the session.
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (line, None),
        };

        let command = match (name.to_ascii_lowercase().as_str(), arg) {
            ("amount", Some(text)) => Command::Amount(text.to_string()),
            ("type", Some(keys)) => Command::Type(keys.to_string()),
            ("back", None) => Command::Back,
            ("clear", None) => Command::Clear,
            ("tip" | "tips", arg) => Command::Tip(arg.map(parse_number::<u32>).transpose()?),
            ("people", arg) => Command::People(arg.map(parse_number::<i64>).transpose()?),
            ("show", None) => Command::Show,
            ("json", None) => Command::Json,
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            ("amount" | "type", None) => {
                return Err(AppError::invalid_command(format!("usage: {name} <text>")))
            }
            ("", _) => return Err(AppError::invalid_command("empty command")),
            (other, _) => {
                return Err(AppError::invalid_command(format!(
                    "unknown command: {other} (try `help`)"
                )))
            }
        };

        Ok(command)
    }
}

fn parse_number<T: FromStr>(text: &str) -> Result<T, AppError> {
    text.parse::<T>()
        .map_err(|_| AppError::invalid_command(format!("not a whole number: {text}")))
}

/// Runs one command against the session.
pub fn execute(session: &mut BillSession, command: Command) -> Result<Reply, AppError> {
    debug!(?command, "executing command");

    let output = match command {
        Command::Amount(text) => bill::amount(session, &text)?,
        Command::Type(keys) => bill::type_keys(session, &keys)?,
        Command::Back => bill::backspace(session)?,
        Command::Clear => bill::clear(session)?,
        Command::Tip(Some(value)) => bill::tip(session, value)?,
        Command::Tip(None) => summary::tip_list(session),
        Command::People(Some(count)) => bill::people(session, count)?,
        Command::People(None) => summary::people_list(session),
        Command::Show => summary::show(session),
        Command::Json => summary::json(session)?,
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Reply::Quit),
    };

    Ok(Reply::Output(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_commands() {
        assert_eq!("amount 47.89".parse::<Command>().unwrap(), Command::Amount("47.89".into()));
        assert_eq!("  TIP 15 ".parse::<Command>().unwrap(), Command::Tip(Some(15)));
        assert_eq!("tips".parse::<Command>().unwrap(), Command::Tip(None));
        assert_eq!("people".parse::<Command>().unwrap(), Command::People(None));
        assert_eq!("people -3".parse::<Command>().unwrap(), Command::People(Some(-3)));
        assert_eq!("type 1.5".parse::<Command>().unwrap(), Command::Type("1.5".into()));
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        for line in ["", "amount", "tip ten", "people 4.5", "split 3", "show me"] {
            let err = line.parse::<Command>().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidCommand, "{line:?}");
        }
    }

    #[test]
    fn test_quit_reply() {
        let mut session = crate::tests::session();
        assert_eq!(execute(&mut session, Command::Quit).unwrap(), Reply::Quit);
    }

    #[test]
    fn test_help_reply() {
        let mut session = crate::tests::session();
        let reply = execute(&mut session, Command::Help).unwrap();
        assert_eq!(reply, Reply::Output(HELP.to_string()));
    }
}
