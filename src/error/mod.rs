//! Error handling module for navsh.
//!
//! This module provides error handling for filesystem navigation with:
//! - A closed set of navigation error kinds ([`NavError`]) so callers can
//!   match on resolution failures exhaustively
//! - An application-level error type ([`NavshError`]) wrapping parsing,
//!   execution, configuration and I/O failures
//! - `Result` aliases for both layers
//!
//! # Example
//!
//! ```rust,no_run
//! use navsh::error::{NavError, NavResult};
//!
//! fn require_nonempty(path: &str) -> NavResult<()> {
//!     if path.is_empty() {
//!         return Err(NavError::InvalidPath("empty path".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{
    ConfigError, ExecutionError, NavError, NavResult, NavshError, ParseError, Result,
};
