//! JSON formatting for execution results
//!
//! This module provides JSON formatting for result data:
//! - Pretty-printed and compact JSON output
//! - Directory listings rendered as arrays of entry objects
//! - Optional color highlighting for pretty-printed output

use colored_json::prelude::*;
use serde_json::json;

use crate::error::Result;
use crate::executor::ResultData;
use crate::gateway::DirectoryEntry;

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Indentation level
    indent: usize,

    /// Enable colored output
    use_colors: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    ///
    /// # Arguments
    /// * `pretty` - Enable pretty printing
    /// * `use_colors` - Enable colored output
    /// * `indent` - Spaces per indentation level
    ///
    /// # Returns
    /// * `Self` - New formatter
    pub fn new(pretty: bool, use_colors: bool, indent: usize) -> Self {
        Self {
            pretty,
            indent,
            use_colors,
        }
    }

    /// Format result data as JSON
    ///
    /// # Arguments
    /// * `data` - Result data to format
    ///
    /// # Returns
    /// * `Result<String>` - JSON string or error
    pub fn format(&self, data: &ResultData) -> Result<String> {
        match data {
            ResultData::Listing(entries) => {
                let entries: Vec<&DirectoryEntry> = entries.values().collect();
                self.format_value(&entries)
            }
            ResultData::Path(path) => self.format_value(&json!({ "path": path })),
            ResultData::Message(msg) => Ok(serde_json::to_string(msg)
                .unwrap_or_else(|_| format!("\"{}\"", msg))),
            ResultData::None => Ok("null".to_string()),
        }
    }

    /// Serialize a value, applying pretty printing and colors as configured
    fn format_value<T: serde::Serialize + std::fmt::Debug>(&self, value: &T) -> Result<String> {
        let json_str = if self.pretty {
            self.to_pretty_string(value)
                .unwrap_or_else(|_| format!("{:?}", value))
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
        };

        // Only apply colors for pretty-printed JSON
        // Compact JSON should remain as-is for piping/logging
        if self.use_colors && self.pretty {
            Ok(json_str.to_colored_json_auto().unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }

    /// Convert a value to pretty-printed JSON with custom indentation
    ///
    /// # Arguments
    /// * `value` - The value to serialize
    ///
    /// # Returns
    /// * `Result<String, serde_json::Error>` - Pretty JSON string with custom indent
    fn to_pretty_string<T: serde::Serialize>(
        &self,
        value: &T,
    ) -> std::result::Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        Ok(String::from_utf8(buf).unwrap())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true, false, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_listing() -> ResultData {
        let mut entries = BTreeMap::new();
        entries.insert(
            "/work/README.md".to_string(),
            DirectoryEntry {
                path: "/work/README.md".to_string(),
                is_directory: false,
            },
        );
        entries.insert(
            "/work/src".to_string(),
            DirectoryEntry {
                path: "/work/src".to_string(),
                is_directory: true,
            },
        );
        ResultData::Listing(entries)
    }

    #[test]
    fn test_json_formatter_listing_compact() {
        let formatter = JsonFormatter::new(false, false, 2);
        let result = formatter.format(&sample_listing()).unwrap();
        assert!(
            !result.contains('\n'),
            "Compact JSON should not contain newlines"
        );
        assert!(result.contains("\"path\":\"/work/README.md\""));
        assert!(result.contains("\"is_directory\":true"));
        // Ascending path order is preserved in the array
        let readme = result.find("README.md").unwrap();
        let src = result.find("/work/src").unwrap();
        assert!(readme < src);
    }

    #[test]
    fn test_json_formatter_listing_pretty() {
        let formatter = JsonFormatter::new(true, false, 4);
        let result = formatter.format(&sample_listing()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("    \""));
    }

    #[test]
    fn test_json_formatter_path() {
        let formatter = JsonFormatter::new(false, false, 2);
        let result = formatter
            .format(&ResultData::Path("/work/src".to_string()))
            .unwrap();
        assert_eq!(result, "{\"path\":\"/work/src\"}");
    }

    #[test]
    fn test_json_formatter_message_escapes() {
        let formatter = JsonFormatter::new(false, false, 2);
        let result = formatter
            .format(&ResultData::Message("line one\nline \"two\"".to_string()))
            .unwrap();
        assert_eq!(result, "\"line one\\nline \\\"two\\\"\"");
    }

    #[test]
    fn test_json_formatter_none() {
        let formatter = JsonFormatter::new(false, false, 2);
        let result = formatter.format(&ResultData::None).unwrap();
        assert_eq!(result, "null");
    }

    #[test]
    fn test_json_formatter_compact_vs_pretty() {
        let compact = JsonFormatter::new(false, false, 2);
        let pretty = JsonFormatter::new(true, false, 2);

        let compact_result = compact.format(&sample_listing()).unwrap();
        let pretty_result = pretty.format(&sample_listing()).unwrap();

        assert!(compact_result.len() < pretty_result.len());
        assert!(pretty_result.contains('\n'));
        assert!(!compact_result.contains('\n'));
    }
}
