//! Terminal Commands - Line Parser
//!
//! Turns one line of user input into a command. Session commands are
//! forwarded to `OrderingSession`; the rest are handled by the CLI loop.

use crate::domain::catalog::ItemId;
use crate::domain::checkout::CheckoutForm;
use crate::usecases::ordering_session::SessionCommand;

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands:
  add <id>               add one item to the order
  remove <id>            remove one item from the order
  checkout               finish the order and enter card details
  pay <YYYY-MM> <name>   submit card expiry and name
  new                    start a new order after checkout
  show                   print the menu again
  json                   print the current order as JSON
  help                   show this text
  quit                   exit
";

/// Errors for input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
  #[error("Unknown command '{0}', type 'help' for a list")]
  Unknown(String),

  #[error("Missing {0}")]
  MissingArgument(&'static str),

  #[error("'{0}' is not a valid item id")]
  InvalidId(String),
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
  Session(SessionCommand),
  ShowMenu,
  Json,
  Help,
  Quit,
  /// Blank line.
  Nothing,
}

/// Parse one input line.
///
/// # Errors
/// `ParseError` for unknown verbs, missing arguments or bad ids.
pub fn parse_command(line: &str) -> Result<TerminalCommand, ParseError> {
  let mut words = line.split_whitespace();
  let Some(verb) = words.next() else {
    return Ok(TerminalCommand::Nothing);
  };

  let command = match verb.to_ascii_lowercase().as_str() {
    "add" | "+" => TerminalCommand::Session(SessionCommand::Add(parse_id(words.next())?)),
    "remove" | "-" => {
      TerminalCommand::Session(SessionCommand::Remove(parse_id(words.next())?))
    }
    "checkout" | "order" => TerminalCommand::Session(SessionCommand::StartCheckout),
    "pay" => {
      let expiry = words.next().ok_or(ParseError::MissingArgument("card expiry"))?;
      let name = words.collect::<Vec<_>>().join(" ");
      TerminalCommand::Session(SessionCommand::Submit(CheckoutForm::new(name, expiry)))
    }
    "new" => TerminalCommand::Session(SessionCommand::NewOrder),
    "show" | "menu" => TerminalCommand::ShowMenu,
    "json" => TerminalCommand::Json,
    "help" | "?" => TerminalCommand::Help,
    "quit" | "exit" => TerminalCommand::Quit,
    other => return Err(ParseError::Unknown(other.to_string())),
  };

  Ok(command)
}

fn parse_id(word: Option<&str>) -> Result<ItemId, ParseError> {
  let word = word.ok_or(ParseError::MissingArgument("item id"))?;
  word
    .parse()
    .map_err(|_| ParseError::InvalidId(word.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_add_and_remove() {
    assert_eq!(
      parse_command("add 1"),
      Ok(TerminalCommand::Session(SessionCommand::Add(1)))
    );
    assert_eq!(
      parse_command("  REMOVE   2 "),
      Ok(TerminalCommand::Session(SessionCommand::Remove(2)))
    );
  }

  #[test]
  fn test_pay_collects_full_name() {
    assert_eq!(
      parse_command("pay 2027-09 Ada King Lovelace"),
      Ok(TerminalCommand::Session(SessionCommand::Submit(
        CheckoutForm::new("Ada King Lovelace", "2027-09")
      )))
    );
  }

  #[test]
  fn test_pay_without_name_parses() {
    // Blank names are rejected by checkout validation, not the parser.
    assert_eq!(
      parse_command("pay 2027-09"),
      Ok(TerminalCommand::Session(SessionCommand::Submit(
        CheckoutForm::new("", "2027-09")
      )))
    );
  }

  #[test]
  fn test_errors() {
    assert_eq!(
      parse_command("add"),
      Err(ParseError::MissingArgument("item id"))
    );
    assert_eq!(
      parse_command("add pizza"),
      Err(ParseError::InvalidId("pizza".to_string()))
    );
    assert_eq!(
      parse_command("dance"),
      Err(ParseError::Unknown("dance".to_string()))
    );
    assert_eq!(
      parse_command("pay"),
      Err(ParseError::MissingArgument("card expiry"))
    );
  }

  #[test]
  fn test_blank_line() {
    assert_eq!(parse_command("   "), Ok(TerminalCommand::Nothing));
  }

  #[test]
  fn test_misc_commands() {
    assert_eq!(parse_command("checkout"), Ok(TerminalCommand::Session(SessionCommand::StartCheckout)));
    assert_eq!(parse_command("json"), Ok(TerminalCommand::Json));
    assert_eq!(parse_command("quit"), Ok(TerminalCommand::Quit));
  }
}
