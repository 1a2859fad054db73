//! In-memory filesystem gateway for tests and embedding.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::{NavError, NavResult};
use crate::gateway::{AsyncFsGateway, DirectoryEntry, FileStat};

/// Deterministic [`AsyncFsGateway`] over a flat map of absolute paths.
///
/// Missing ancestors are created implicitly as directories, so a tree can
/// be declared entry by entry:
///
/// ```rust
/// use navsh::gateway::MemoryFsGateway;
///
/// let fs = MemoryFsGateway::new()
///     .with_dir("/work/foo11/bar22")
///     .with_file("/work/foo33");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFsGateway {
    /// Absolute path -> is_directory. Root is always present.
    nodes: BTreeMap<String, bool>,
}

impl MemoryFsGateway {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), true);
        Self { nodes }
    }

    /// Add a directory, creating missing ancestors.
    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert(path, true);
        self
    }

    /// Add a file, creating missing ancestors as directories.
    pub fn with_file(mut self, path: &str) -> Self {
        self.insert(path, false);
        self
    }

    fn insert(&mut self, path: &str, is_directory: bool) {
        let mut acc = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            acc.push('/');
            acc.push_str(segment);
            self.nodes.entry(acc.clone()).or_insert(true);
        }
        if !acc.is_empty() {
            self.nodes.insert(acc, is_directory);
        }
    }

    fn lookup(&self, path: &str) -> Option<bool> {
        self.nodes.get(path).copied()
    }
}

#[async_trait]
impl AsyncFsGateway for MemoryFsGateway {
    async fn stat(&self, path: &str) -> NavResult<FileStat> {
        match self.lookup(path) {
            Some(is_directory) => Ok(FileStat {
                exists: true,
                is_directory,
            }),
            None => Ok(FileStat::missing()),
        }
    }

    async fn read_dir(&self, path: &str) -> NavResult<Vec<DirectoryEntry>> {
        match self.lookup(path) {
            None => Err(NavError::NotFound(path.to_string())),
            Some(false) => Err(NavError::NotADirectory(path.to_string())),
            Some(true) => {
                let prefix = if path == "/" {
                    "/".to_string()
                } else {
                    format!("{path}/")
                };
                let entries = self
                    .nodes
                    .iter()
                    .filter(|(p, _)| {
                        p.starts_with(&prefix)
                            && p.len() > prefix.len()
                            && !p[prefix.len()..].contains('/')
                    })
                    .map(|(p, is_dir)| DirectoryEntry {
                        path: p.clone(),
                        is_directory: *is_dir,
                    })
                    .collect();
                Ok(entries)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_always_exists() {
        let fs = MemoryFsGateway::new();
        let stat = fs.stat("/").await.unwrap();
        assert!(stat.exists);
        assert!(stat.is_directory);
    }

    #[tokio::test]
    async fn test_ancestors_created_implicitly() {
        let fs = MemoryFsGateway::new().with_file("/a/b/c.txt");

        let a = fs.stat("/a").await.unwrap();
        assert!(a.exists && a.is_directory);

        let b = fs.stat("/a/b").await.unwrap();
        assert!(b.exists && b.is_directory);

        let c = fs.stat("/a/b/c.txt").await.unwrap();
        assert!(c.exists && !c.is_directory);
    }

    #[tokio::test]
    async fn test_read_dir_lists_only_immediate_children() {
        let fs = MemoryFsGateway::new()
            .with_dir("/work/dir_A")
            .with_file("/work/file_B")
            .with_dir("/work/dir_A/nested");

        let entries = fs.read_dir("/work").await.unwrap();
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/work/dir_A", "/work/file_B"]);
    }

    #[tokio::test]
    async fn test_read_dir_at_root() {
        let fs = MemoryFsGateway::new().with_dir("/etc").with_file("/README");

        let entries = fs.read_dir("/").await.unwrap();
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/README", "/etc"]);
    }

    #[tokio::test]
    async fn test_read_dir_error_kinds() {
        let fs = MemoryFsGateway::new().with_file("/note");

        assert!(matches!(
            fs.read_dir("/missing").await.unwrap_err(),
            NavError::NotFound(_)
        ));
        assert!(matches!(
            fs.read_dir("/note").await.unwrap_err(),
            NavError::NotADirectory(_)
        ));
    }
}
