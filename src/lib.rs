//! navsh - Interactive filesystem navigation shell
//!
//! This library provides the core functionality of navsh: a small
//! interactive shell for moving around a directory tree, with
//! readline-style path completion over an async filesystem gateway.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `executor`: Command execution engine
//! - `formatter`: Output formatting and display
//! - `gateway`: Async filesystem access
//! - `nav`: Path resolution, directory listing and completion
//! - `parser`: Command parsing
//! - `repl`: Interactive REPL engine
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use navsh::gateway::MemoryFsGateway;
//! use navsh::nav::PathResolver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fs = MemoryFsGateway::new().with_dir("/work/src");
//!     let resolver = PathResolver::new(Arc::new(fs));
//!
//!     let path = resolver.resolve(Some("/work"), "src/..").await?;
//!     assert_eq!(path, "/work");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod formatter;
pub mod gateway;
pub mod nav;
pub mod parser;
pub mod repl;

// Re-export commonly used types
pub use config::Config;
pub use error::{NavshError, Result};
pub use executor::{ExecutionContext, ExecutionResult};
pub use formatter::Formatter;
pub use gateway::{AsyncFsGateway, TokioFsGateway};
pub use nav::{CompletionEngine, DirectoryLister, PathResolver};
pub use parser::{Command, Parser};
pub use repl::{ReplEngine, SharedState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
