//! Command type definitions for navsh
//!
//! This module defines the built-in commands the shell can parse and
//! execute.

/// Represents a parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change the working directory; without an argument, return to the
    /// session's starting directory
    Cd(Option<String>),

    /// List a directory's children; without an argument, list the working
    /// directory
    Ls(Option<String>),

    /// Print the working directory
    Pwd,

    /// Help command with optional topic
    Help(Option<String>),

    /// Exit/quit command
    Exit,
}

impl Command {
    /// The verb this command is typed as.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Cd(_) => "cd",
            Command::Ls(_) => "ls",
            Command::Pwd => "pwd",
            Command::Help(_) => "help",
            Command::Exit => "exit",
        }
    }
}
