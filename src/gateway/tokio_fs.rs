//! Gateway adapter over the local filesystem via `tokio::fs`.

use std::io;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{NavError, NavResult};
use crate::gateway::{AsyncFsGateway, DirectoryEntry, FileStat};

/// [`AsyncFsGateway`] backed by the local filesystem.
///
/// `stat` follows symlinks, matching `tokio::fs::metadata`. A dangling
/// symlink therefore stats as missing, and a symlink to a directory is a
/// directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFsGateway;

impl TokioFsGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AsyncFsGateway for TokioFsGateway {
    async fn stat(&self, path: &str) -> NavResult<FileStat> {
        match tokio::fs::metadata(path).await {
            Ok(meta) => Ok(FileStat {
                exists: true,
                is_directory: meta.is_dir(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FileStat::missing()),
            Err(e) => Err(NavError::Gateway(e)),
        }
    }

    async fn read_dir(&self, path: &str) -> NavResult<Vec<DirectoryEntry>> {
        let stat = self.stat(path).await?;
        if !stat.exists {
            return Err(NavError::NotFound(path.to_string()));
        }
        if !stat.is_directory {
            return Err(NavError::NotADirectory(path.to_string()));
        }

        let mut reader = tokio::fs::read_dir(path).await.map_err(NavError::Gateway)?;
        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await.map_err(NavError::Gateway)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry.file_type().await.map_err(NavError::Gateway)?;
            let is_directory = if file_type.is_symlink() {
                // Follow the link the way stat does; a broken link counts
                // as a plain entry.
                tokio::fs::metadata(entry.path())
                    .await
                    .map(|meta| meta.is_dir())
                    .unwrap_or(false)
            } else {
                file_type.is_dir()
            };
            entries.push(DirectoryEntry {
                path: join_child(path, &name),
                is_directory,
            });
        }

        debug!("read_dir {} -> {} entries", path, entries.len());
        Ok(entries)
    }
}

/// Append a child name to a canonical directory path.
fn join_child(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}
