//! Output formatting and colorization
//!
//! This module provides formatting functionality for command execution results:
//! - Plain text output with `ls`-style columnar listings
//! - JSON formatting (compact and pretty-printed)
//! - Color highlighting for improved readability
//! - Optional execution statistics

mod colorizer;
mod json;
mod plain;

pub use colorizer::{AnsiColors, Colorizer};
pub use json::JsonFormatter;
pub use plain::PlainFormatter;

use crate::config::{DisplayConfig, OutputFormat};
use crate::error::Result;
use crate::executor::ExecutionResult;

/// Main formatter for execution results
pub struct Formatter {
    /// Output format type
    format_type: OutputFormat,

    /// Colorizer for output highlighting
    colorizer: Colorizer,

    /// Enable colored output
    use_colors: bool,

    /// Append execution statistics to successful output
    show_timing: bool,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `format_type` - Output format type
    /// * `use_colors` - Enable colored output
    ///
    /// # Returns
    /// * `Self` - New formatter instance
    pub fn new(format_type: OutputFormat, use_colors: bool) -> Self {
        Self {
            format_type,
            colorizer: Colorizer::new(use_colors),
            use_colors,
            show_timing: false,
        }
    }

    /// Create a formatter from display configuration
    ///
    /// # Arguments
    /// * `config` - Display configuration
    ///
    /// # Returns
    /// * `Self` - New formatter instance
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            format_type: config.format,
            colorizer: Colorizer::new(config.color_output),
            use_colors: config.color_output,
            show_timing: config.show_timing,
        }
    }

    /// Format execution result according to configured format
    ///
    /// # Arguments
    /// * `result` - Execution result to format
    ///
    /// # Returns
    /// * `Result<String>` - Formatted output or error
    pub fn format(&self, result: &ExecutionResult) -> Result<String> {
        if !result.success {
            return self.format_error(result);
        }

        let output = match self.format_type {
            OutputFormat::Plain => PlainFormatter::new(self.use_colors).format(&result.data)?,
            OutputFormat::Json => {
                JsonFormatter::new(false, self.use_colors, 2).format(&result.data)?
            }
            OutputFormat::JsonPretty => {
                JsonFormatter::new(true, self.use_colors, 2).format(&result.data)?
            }
        };

        // Append statistics if enabled
        let stats = self.format_stats(result);
        if stats.is_empty() {
            Ok(output)
        } else if output.is_empty() {
            Ok(stats)
        } else {
            Ok(format!("{}\n{}", output, stats))
        }
    }

    /// Format error result
    ///
    /// # Arguments
    /// * `result` - Execution result with error
    ///
    /// # Returns
    /// * `Result<String>` - Formatted error message
    fn format_error(&self, result: &ExecutionResult) -> Result<String> {
        let unknown_error = String::from("Unknown error");
        let error_msg = result.error.as_ref().unwrap_or(&unknown_error);
        Ok(self.colorizer.error(error_msg))
    }

    /// Format execution statistics
    ///
    /// # Arguments
    /// * `result` - Execution result
    ///
    /// # Returns
    /// * `String` - Formatted statistics, empty when disabled
    fn format_stats(&self, result: &ExecutionResult) -> String {
        if !self.show_timing {
            return String::new();
        }

        let mut parts = Vec::new();

        if result.stats.execution_time_ms > 0 {
            parts.push(format!(
                "Execution time: {}ms",
                result.stats.execution_time_ms
            ));
        }

        if result.stats.entries_returned > 0 {
            parts.push(format!("{} entries", result.stats.entries_returned));
        }

        if parts.is_empty() {
            String::new()
        } else {
            self.colorizer.dim(&parts.join(", "))
        }
    }

    /// Set output format
    ///
    /// # Arguments
    /// * `format_type` - New output format
    pub fn set_format(&mut self, format_type: OutputFormat) {
        self.format_type = format_type;
    }

    /// Enable or disable colors
    ///
    /// # Arguments
    /// * `enabled` - Whether to enable colors
    pub fn set_colors(&mut self, enabled: bool) {
        self.use_colors = enabled;
        self.colorizer.set_enabled(enabled);
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputFormat::Plain, true)
    }
}
