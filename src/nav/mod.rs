//! Path navigation engine.
//!
//! Three stateless components layered over the filesystem gateway:
//! - [`PathResolver`] turns typed paths into canonical absolute paths,
//!   validated against the filesystem
//! - [`DirectoryLister`] enumerates immediate children in ascending
//!   byte order
//! - [`CompletionEngine`] computes readline-style completion candidates
//!   by longest common prefix
//!
//! None of them hold state across calls; the session's working directory
//! is a value passed in and a new value handed back.

pub mod completion;
pub mod lister;
pub mod resolver;

pub use completion::CompletionEngine;
pub use lister::DirectoryLister;
pub use resolver::{PathResolver, normalize};
