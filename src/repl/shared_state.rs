use std::sync::{Arc, RwLock};

use crate::config::{DisplayConfig, OutputFormat};

/// Shared state between REPL and execution context.
#[derive(Debug, Clone)]
pub struct SharedState {
    /// Current working directory (canonical absolute path)
    pub working_dir: Arc<RwLock<String>>,

    /// Directory the session started in, target of a bare `cd`
    start_dir: String,

    /// Output format setting
    pub output_format: Arc<RwLock<OutputFormat>>,

    /// Color output setting
    pub color_enabled: Arc<RwLock<bool>>,
}

impl SharedState {
    /// Create a new shared state.
    ///
    /// * `working_dir` - Initial working directory
    pub fn new(working_dir: String) -> Self {
        Self::with_config(working_dir, &DisplayConfig::default())
    }

    /// Create a new shared state with display configuration.
    ///
    /// * `working_dir` - Initial working directory
    /// * `display_config` - Display configuration settings
    pub fn with_config(working_dir: String, display_config: &DisplayConfig) -> Self {
        let start_dir = working_dir.clone();
        Self {
            working_dir: Arc::new(RwLock::new(working_dir)),
            start_dir,
            output_format: Arc::new(RwLock::new(display_config.format)),
            color_enabled: Arc::new(RwLock::new(display_config.color_output)),
        }
    }

    /// Get current working directory.
    pub fn get_working_dir(&self) -> String {
        self.working_dir.read().unwrap().clone()
    }

    /// Set current working directory.
    pub fn set_working_dir(&self, dir: String) {
        *self.working_dir.write().unwrap() = dir;
    }

    /// Directory the session started in.
    pub fn start_dir(&self) -> &str {
        &self.start_dir
    }

    /// Get current output format.
    pub fn get_format(&self) -> OutputFormat {
        *self.output_format.read().unwrap()
    }

    /// Set output format.
    pub fn set_format(&self, format: OutputFormat) {
        *self.output_format.write().unwrap() = format;
    }

    /// Get current color setting.
    pub fn get_color_enabled(&self) -> bool {
        *self.color_enabled.read().unwrap()
    }

    /// Set color output.
    pub fn set_color_enabled(&self, enabled: bool) {
        *self.color_enabled.write().unwrap() = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_state_creation() {
        let state = SharedState::new("/home/user".to_string());
        assert_eq!(state.get_working_dir(), "/home/user");
        assert_eq!(state.start_dir(), "/home/user");
        assert_eq!(state.get_format(), OutputFormat::Plain);
        assert!(state.get_color_enabled());
    }

    #[test]
    fn test_working_dir_update() {
        let state = SharedState::new("/home/user".to_string());
        state.set_working_dir("/tmp".to_string());
        assert_eq!(state.get_working_dir(), "/tmp");
        // Start directory is fixed for the session
        assert_eq!(state.start_dir(), "/home/user");
    }

    #[test]
    fn test_clones_share_state() {
        let state = SharedState::new("/".to_string());
        let clone = state.clone();

        clone.set_working_dir("/var".to_string());
        clone.set_format(OutputFormat::Json);
        clone.set_color_enabled(false);

        assert_eq!(state.get_working_dir(), "/var");
        assert_eq!(state.get_format(), OutputFormat::Json);
        assert!(!state.get_color_enabled());
    }

    #[test]
    fn test_with_config() {
        let display = DisplayConfig {
            format: OutputFormat::JsonPretty,
            color_output: false,
            show_timing: true,
        };
        let state = SharedState::with_config("/data".to_string(), &display);
        assert_eq!(state.get_format(), OutputFormat::JsonPretty);
        assert!(!state.get_color_enabled());
    }
}
