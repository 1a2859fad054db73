//! Custom prompt implementation for navsh

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

use super::shared_state::SharedState;

/// Working-directory prompt for the navsh REPL
pub struct NavPrompt {
    /// Shared state holding the working directory
    shared_state: SharedState,

    /// Home directory, abbreviated to `~` in the prompt
    home_dir: Option<String>,
}

impl NavPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `shared_state` - Shared state with the working directory
    ///
    /// # Returns
    /// * `Self` - New prompt
    pub fn new(shared_state: SharedState) -> Self {
        let home_dir = dirs::home_dir().and_then(|p| p.to_str().map(String::from));
        Self::with_home(shared_state, home_dir)
    }

    fn with_home(shared_state: SharedState, home_dir: Option<String>) -> Self {
        Self {
            shared_state,
            home_dir,
        }
    }

    /// Abbreviate the home directory prefix to `~`
    fn display_path<'a>(&self, path: &'a str) -> std::borrow::Cow<'a, str> {
        if let Some(home) = &self.home_dir {
            if path == home {
                return "~".into();
            }
            if let Some(rest) = path.strip_prefix(home.as_str()) {
                if rest.starts_with('/') {
                    return format!("~{}", rest).into();
                }
            }
        }
        path.into()
    }
}

impl Prompt for NavPrompt {
    /// Render the left prompt (working directory)
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Prompt string
    fn render_prompt_left(&self) -> std::borrow::Cow<'_, str> {
        let cwd = self.shared_state.get_working_dir();
        format!("{}> ", self.display_path(&cwd)).into()
    }

    /// Render the right prompt (empty in our case)
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Right prompt string (empty)
    fn render_prompt_right(&self) -> std::borrow::Cow<'_, str> {
        "".into()
    }

    /// Render the prompt indicator
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Indicator string (empty since we include it in left prompt)
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> std::borrow::Cow<'_, str> {
        "".into()
    }

    /// Render the multiline prompt indicator
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Multiline indicator
    fn render_prompt_multiline_indicator(&self) -> std::borrow::Cow<'_, str> {
        "... ".into()
    }

    /// Render the history search prompt
    ///
    /// # Arguments
    /// * `history_search` - History search state
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - History search prompt
    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> std::borrow::Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}
