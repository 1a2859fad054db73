//! REPL (Read-Eval-Print Loop) engine for navsh
//!
//! This module provides the interactive shell interface:
//! - Command line editing with reedline
//! - Persistent command history
//! - Tab completion for paths and command verbs
//! - History-based inline hints
//! - Working-directory prompt

mod completer;
mod engine;
mod hinter;
mod prompt;
mod shared_state;

#[cfg(test)]
mod tests;

pub use completer::PathCompleter;
pub use engine::ReplEngine;
pub use hinter::NavHinter;
pub use prompt::NavPrompt;
pub use shared_state::SharedState;
