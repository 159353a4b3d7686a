//! Terminal Adapters - CLI Presentation
//!
//! - View: renders menu, order summary and confirmation as text
//! - Command: parses input lines into session commands

pub mod command;
pub mod view;

pub use command::{HELP, ParseError, TerminalCommand, parse_command};
pub use view::TerminalView;
