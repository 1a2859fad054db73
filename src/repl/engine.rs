//! Interactive line editor built on reedline

use std::sync::Arc;

use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::debug;

use crate::config::HistoryConfig;
use crate::error::{NavshError, Result};
use crate::executor::ExecutionContext;
use crate::parser::{Command, Parser};

use super::completer::PathCompleter;
use super::hinter::NavHinter;
use super::prompt::NavPrompt;
use super::shared_state::SharedState;

/// Name of the reedline completion menu, referenced by the Tab binding
const COMPLETION_MENU: &str = "completion_menu";

/// REPL engine for interactive command execution
pub struct ReplEngine {
    /// Line editor for command input
    editor: Reedline,

    /// Prompt rendering the working directory
    prompt: NavPrompt,

    /// Parser for command parsing
    parser: Parser,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `shared_state` - Shared state with execution context
    /// * `history_config` - History configuration
    /// * `execution_context` - Execution context for path completion
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(
        shared_state: SharedState,
        history_config: HistoryConfig,
        execution_context: Arc<ExecutionContext>,
    ) -> Result<Self> {
        let mut editor = Reedline::create();

        // Load history if persistent
        if history_config.persist {
            match FileBackedHistory::with_file(
                history_config.max_size,
                history_config.file_path.clone(),
            ) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => debug!("history file unavailable: {}", e),
            }
        }

        // Tab opens the completion menu, then cycles through it
        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let completion_menu = ColumnarMenu::default().with_name(COMPLETION_MENU);
        let editor = editor
            .with_completer(Box::new(PathCompleter::new(execution_context)))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(completion_menu)))
            .with_quick_completions(true)
            .with_edit_mode(Box::new(Emacs::new(keybindings)))
            .with_hinter(Box::new(NavHinter::new()));

        Ok(Self {
            editor,
            prompt: NavPrompt::new(shared_state),
            parser: Parser::new(),
            running: true,
        })
    }

    /// Read a single line of input
    ///
    /// Ctrl+C clears the line and re-prompts; Ctrl+D ends the session.
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line or None on EOF
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            Ok(Signal::CtrlC) => Ok(Some(String::new())),
            Ok(Signal::CtrlD) => Ok(None),
            Err(err) => Err(NavshError::Generic(format!("Read error: {}", err))),
        }
    }

    /// Process user input and parse into command
    ///
    /// # Arguments
    /// * `input` - User input string
    ///
    /// # Returns
    /// * `Result<Command>` - Parsed command or error
    pub fn process_input(&self, input: &str) -> Result<Command> {
        self.parser.parse(input)
    }

    /// Check if REPL is still running
    ///
    /// # Returns
    /// * `bool` - True if running
    pub fn is_running(&self) -> bool {
        self.running
    }
}
