//! Asynchronous filesystem gateway.
//!
//! This module defines the narrow filesystem surface the navigation engine
//! consumes: a `stat` that reports existence and directory-ness, and a
//! `read_dir` that enumerates immediate children. Two adapters are provided:
//! - [`TokioFsGateway`] over the local filesystem via `tokio::fs`
//! - [`MemoryFsGateway`], a deterministic in-memory tree for tests and
//!   embedding

use async_trait::async_trait;
use serde::Serialize;

use crate::error::NavResult;

pub mod memory;
pub mod tokio_fs;

pub use memory::MemoryFsGateway;
pub use tokio_fs::TokioFsGateway;

/// Result of a [`AsyncFsGateway::stat`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Whether the path exists at all.
    pub exists: bool,

    /// Whether the path is a directory. Always `false` when `exists` is false.
    pub is_directory: bool,
}

impl FileStat {
    /// Stat of a path that does not exist.
    pub fn missing() -> Self {
        Self {
            exists: false,
            is_directory: false,
        }
    }
}

/// A single child returned by [`AsyncFsGateway::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Absolute path of the entry.
    pub path: String,

    /// Whether the entry is a directory.
    pub is_directory: bool,
}

impl DirectoryEntry {
    /// Final path segment of the entry.
    pub fn basename(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[idx + 1..],
            None => &self.path,
        }
    }
}

/// Non-blocking filesystem primitives consumed by the navigation engine.
///
/// Implementations must be cheap to share (`Arc<dyn AsyncFsGateway>`) and
/// must not retain per-call state. Only genuine I/O failures map to
/// `NavError::Gateway`; a missing path is an ordinary `stat` answer.
#[async_trait]
pub trait AsyncFsGateway: Send + Sync {
    /// Stat an absolute, normalized path.
    ///
    /// # Returns
    /// * `Ok(FileStat)` with `exists: false` when the path is absent
    /// * `Err(NavError::Gateway)` only on I/O failure
    async fn stat(&self, path: &str) -> NavResult<FileStat>;

    /// Enumerate the immediate children of a directory as absolute paths.
    ///
    /// # Returns
    /// * `Ok(entries)` in no particular order; callers impose ordering
    /// * `Err(NavError::NotFound)` when the path does not exist
    /// * `Err(NavError::NotADirectory)` when it exists but is not a directory
    /// * `Err(NavError::Gateway)` on I/O failure
    async fn read_dir(&self, path: &str) -> NavResult<Vec<DirectoryEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_of_nested_path() {
        let entry = DirectoryEntry {
            path: "/work/dir_A".to_string(),
            is_directory: true,
        };
        assert_eq!(entry.basename(), "dir_A");
    }

    #[test]
    fn test_basename_of_root_child() {
        let entry = DirectoryEntry {
            path: "/file_B".to_string(),
            is_directory: false,
        };
        assert_eq!(entry.basename(), "file_B");
    }

    #[test]
    fn test_missing_stat_is_not_a_directory() {
        let stat = FileStat::missing();
        assert!(!stat.exists);
        assert!(!stat.is_directory);
    }
}
