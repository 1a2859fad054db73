//! Command parser for navsh
//!
//! Shell input is a verb followed by at most one path argument. The verb
//! is the first whitespace-separated token; everything after it is taken
//! whole, so paths containing spaces need no quoting.
//!
//! # Examples
//!
//! ```
//! use navsh::parser::{Command, Parser};
//!
//! let parser = Parser::new();
//!
//! let cmd = parser.parse("cd dir_A").unwrap();
//! assert_eq!(cmd, Command::Cd(Some("dir_A".to_string())));
//!
//! let cmd = parser.parse("ls").unwrap();
//! assert_eq!(cmd, Command::Ls(None));
//! ```

mod command;

// Re-export public API
pub use command::Command;

use crate::error::{ParseError, Result};

/// Parser for navsh built-in commands
pub struct Parser {}

impl Parser {
    /// Create a new parser instance
    pub fn new() -> Self {
        Self {}
    }

    /// Parse an input line into a [`Command`].
    ///
    /// # Arguments
    ///
    /// * `input` - The input line to parse
    ///
    /// # Returns
    ///
    /// * `Result<Command>` - The parsed command or an error
    pub fn parse(&self, input: &str) -> Result<Command> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(ParseError::InvalidCommand("empty input".to_string()).into());
        }

        let (verb, rest) = match trimmed.find(char::is_whitespace) {
            Some(idx) => (&trimmed[..idx], trimmed[idx..].trim_start()),
            None => (trimmed, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        match verb {
            "cd" => Ok(Command::Cd(argument)),
            "ls" => Ok(Command::Ls(argument)),
            "pwd" => Self::bare(Command::Pwd, argument),
            "help" => Ok(Command::Help(argument)),
            "exit" | "quit" => Self::bare(Command::Exit, argument),
            _ => Err(ParseError::InvalidCommand(verb.to_string()).into()),
        }
    }

    /// Accept a command only when no argument was supplied.
    fn bare(command: Command, argument: Option<String>) -> Result<Command> {
        match argument {
            None => Ok(command),
            Some(argument) => Err(ParseError::UnexpectedArgument {
                command: command.verb().to_string(),
                argument,
            }
            .into()),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
