//! Plain-text formatting for execution results
//!
//! This module renders result data the way a shell would print it:
//! - Directory listings in `ls`-style columns, sized to the terminal width
//! - Directory entries marked with a trailing `/` and highlighted
//! - Paths and messages printed verbatim

use std::collections::BTreeMap;

use super::colorizer::Colorizer;
use crate::error::Result;
use crate::executor::ResultData;
use crate::gateway::DirectoryEntry;

/// Minimum gap between listing columns
const COLUMN_GAP: usize = 2;

/// Plain text formatter with columnar listings
pub struct PlainFormatter {
    /// Colorizer for output highlighting
    colorizer: Colorizer,

    /// Fixed output width; `None` detects the terminal width
    width: Option<usize>,
}

impl PlainFormatter {
    /// Create a new plain formatter
    ///
    /// # Arguments
    /// * `use_colors` - Enable colored output
    ///
    /// # Returns
    /// * `Self` - New formatter
    pub fn new(use_colors: bool) -> Self {
        Self {
            colorizer: Colorizer::new(use_colors),
            width: None,
        }
    }

    /// Create a formatter with a fixed output width
    pub fn with_width(use_colors: bool, width: usize) -> Self {
        Self {
            colorizer: Colorizer::new(use_colors),
            width: Some(width),
        }
    }

    /// Format result data as plain text
    ///
    /// # Arguments
    /// * `data` - Result data to format
    ///
    /// # Returns
    /// * `Result<String>` - Plain text output
    pub fn format(&self, data: &ResultData) -> Result<String> {
        match data {
            ResultData::Listing(entries) => Ok(self.format_listing(entries)),
            ResultData::Path(path) => Ok(path.clone()),
            ResultData::Message(msg) => Ok(msg.clone()),
            ResultData::None => Ok(String::new()),
        }
    }

    /// Lay out directory entries in columns, top to bottom then left to right
    fn format_listing(&self, entries: &BTreeMap<String, DirectoryEntry>) -> String {
        if entries.is_empty() {
            return String::new();
        }

        // Visible cell text and its width; colors are applied after padding
        // so escape sequences do not distort the layout.
        let cells: Vec<(String, usize)> = entries
            .values()
            .map(|entry| {
                let name = entry.basename();
                if entry.is_directory {
                    (
                        format!("{}/", self.colorizer.directory(name)),
                        name.chars().count() + 1,
                    )
                } else {
                    (name.to_string(), name.chars().count())
                }
            })
            .collect();

        let width = self.width.unwrap_or_else(detect_terminal_width);
        let longest = cells.iter().map(|(_, len)| *len).max().unwrap_or(0);
        let col_width = longest + COLUMN_GAP;
        let columns = (width / col_width).max(1);
        let rows = cells.len().div_ceil(columns);

        let mut output = String::new();
        for row in 0..rows {
            for col in 0..columns {
                let idx = col * rows + row;
                let Some((text, visible_len)) = cells.get(idx) else {
                    break;
                };

                output.push_str(text);

                // Pad every cell but the last in its row
                if idx + rows < cells.len() {
                    for _ in *visible_len..col_width {
                        output.push(' ');
                    }
                }
            }
            if row + 1 < rows {
                output.push('\n');
            }
        }

        output
    }
}

/// Current terminal width in columns, falling back to 80
fn detect_terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(80)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(entries: &[(&str, bool)]) -> ResultData {
        let mut map = BTreeMap::new();
        for (path, is_directory) in entries {
            map.insert(
                path.to_string(),
                DirectoryEntry {
                    path: path.to_string(),
                    is_directory: *is_directory,
                },
            );
        }
        ResultData::Listing(map)
    }

    #[test]
    fn test_plain_formatter_path_and_message() {
        let formatter = PlainFormatter::new(false);
        assert_eq!(
            formatter
                .format(&ResultData::Path("/work".to_string()))
                .unwrap(),
            "/work"
        );
        assert_eq!(
            formatter
                .format(&ResultData::Message("hello".to_string()))
                .unwrap(),
            "hello"
        );
        assert_eq!(formatter.format(&ResultData::None).unwrap(), "");
    }

    #[test]
    fn test_plain_formatter_empty_listing() {
        let formatter = PlainFormatter::new(false);
        assert_eq!(formatter.format(&listing(&[])).unwrap(), "");
    }

    #[test]
    fn test_plain_formatter_column_layout() {
        let formatter = PlainFormatter::with_width(false, 20);
        let data = listing(&[
            ("/work/alpha", true),
            ("/work/beta.txt", false),
            ("/work/gamma", false),
        ]);

        // Longest cell is "beta.txt" (8), column width 10, two columns fit.
        // Column-major: first column alpha/, beta.txt; second column gamma.
        let output = formatter.format(&data).unwrap();
        assert_eq!(output, "alpha/    gamma\nbeta.txt");
    }

    #[test]
    fn test_plain_formatter_narrow_terminal_single_column() {
        let formatter = PlainFormatter::with_width(false, 5);
        let data = listing(&[("/work/longname.rs", false), ("/work/other.rs", false)]);
        let output = formatter.format(&data).unwrap();
        assert_eq!(output, "longname.rs\nother.rs");
    }

    #[test]
    fn test_plain_formatter_directory_marker_and_color() {
        let formatter = PlainFormatter::with_width(true, 80);
        let data = listing(&[("/work/src", true)]);
        let output = formatter.format(&data).unwrap();
        assert!(output.contains("\x1b"));
        assert!(output.ends_with('/'));

        let plain = PlainFormatter::with_width(false, 80);
        let output = plain.format(&data).unwrap();
        assert_eq!(output, "src/");
    }

    #[test]
    fn test_plain_formatter_padding_ignores_color_codes() {
        let formatter = PlainFormatter::with_width(true, 20);
        let data = listing(&[("/work/dir", true), ("/work/file.txt", false)]);

        // "file.txt" (8) is longest, so the single row is two 10-wide cells.
        let output = formatter.format(&data).unwrap();
        let stripped: String = strip_ansi(&output);
        assert_eq!(stripped, "dir/      file.txt");
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            if in_escape {
                if c == 'm' {
                    in_escape = false;
                }
            } else if c == '\x1b' {
                in_escape = true;
            } else {
                out.push(c);
            }
        }
        out
    }
}
