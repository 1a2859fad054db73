//! Completer for reedline - provides completion suggestions

use std::sync::Arc;

use reedline::{Completer, Span, Suggestion};
use tokio::runtime::Handle;
use tokio::task;

use crate::executor::ExecutionContext;

/// Command verbs offered in command position, with menu descriptions
const VERBS: &[(&str, &str)] = &[
    ("cd", "Change the working directory"),
    ("exit", "Leave the shell"),
    ("help", "Show command help"),
    ("ls", "List directory contents"),
    ("pwd", "Print the working directory"),
    ("quit", "Leave the shell"),
];

/// Path completer for reedline
///
/// In command position it offers the built-in verbs. After a verb it runs
/// readline-style path completion against the current working directory:
/// a single match is inserted at the cursor (with a trailing `/` for
/// directories), several matches sharing a longer prefix extend the input
/// to that prefix, and otherwise the matching names are listed.
pub struct PathCompleter {
    /// Execution context used to run completion queries
    context: Arc<ExecutionContext>,
}

impl PathCompleter {
    /// Create a new path completer
    ///
    /// # Arguments
    /// * `context` - Execution context for completion queries
    ///
    /// # Returns
    /// * `Self` - New completer
    pub fn new(context: Arc<ExecutionContext>) -> Self {
        Self { context }
    }

    /// Complete the command verb being typed at the start of the line
    fn complete_verb(&self, prefix: &str, start: usize, pos: usize) -> Vec<Suggestion> {
        VERBS
            .iter()
            .filter(|(verb, _)| verb.starts_with(prefix))
            .map(|(verb, description)| Suggestion {
                value: verb.to_string(),
                description: Some(description.to_string()),
                style: None,
                extra: None,
                span: Span::new(start, pos),
                append_whitespace: true,
                match_indices: None,
            })
            .collect()
    }

    /// Complete a path fragment after a command verb
    fn complete_argument(&self, fragment: &str, arg_start: usize, pos: usize) -> Vec<Suggestion> {
        // The completion engine is async; reedline is not. Block on the
        // query from within the runtime driving the REPL.
        let completed = task::block_in_place(|| {
            Handle::current().block_on(self.context.complete_path(fragment))
        });

        let candidates = match completed {
            Ok(candidates) => candidates,
            Err(_) => return Vec::new(),
        };

        // A single candidate is the text to insert at the cursor. Several
        // candidates are whole entry names replacing the fragment's final
        // segment, so the menu shows full names.
        let span = if candidates.len() == 1 {
            Span::new(pos, pos)
        } else {
            let segment_start = fragment.rfind('/').map(|i| i + 1).unwrap_or(0);
            Span::new(arg_start + segment_start, pos)
        };

        candidates
            .into_iter()
            .map(|(value, terminal)| Suggestion {
                value,
                description: None,
                style: None,
                extra: None,
                span,
                append_whitespace: terminal,
                match_indices: None,
            })
            .collect()
    }
}

impl Completer for PathCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_cursor = &line[..pos.min(line.len())];

        match argument_at_cursor(line_to_cursor) {
            Some((arg_start, fragment)) => self.complete_argument(fragment, arg_start, pos),
            None => {
                let verb_start = line_to_cursor.len() - line_to_cursor.trim_start().len();
                self.complete_verb(&line_to_cursor[verb_start..], verb_start, pos)
            }
        }
    }
}

/// Locate the path argument under the cursor.
///
/// Returns the byte offset where the argument begins and its text, or
/// `None` while the command verb itself is still being typed.
fn argument_at_cursor(line_to_cursor: &str) -> Option<(usize, &str)> {
    let verb_start = line_to_cursor.len() - line_to_cursor.trim_start().len();
    let verb_len = line_to_cursor[verb_start..].find(char::is_whitespace)?;
    let after_verb = &line_to_cursor[verb_start + verb_len..];
    let arg_start = verb_start + verb_len + (after_verb.len() - after_verb.trim_start().len());
    Some((arg_start, &line_to_cursor[arg_start..]))
}
