//! Path resolution against a base working directory.
//!
//! Resolution is a pure textual normalization followed by a single `stat`
//! through the gateway. The canonical form is an absolute `/`-separated
//! path that never ends in `/` except for the root itself.

use std::sync::Arc;

use tracing::debug;

use crate::error::{NavError, NavResult};
use crate::gateway::AsyncFsGateway;

/// Resolves typed path input into canonical absolute paths.
///
/// A resolver is cheap to clone and safe to share; it holds only the
/// gateway handle and the default base used when a call passes no
/// working directory.
#[derive(Clone)]
pub struct PathResolver {
    gateway: Arc<dyn AsyncFsGateway>,
    default_dir: String,
}

impl PathResolver {
    /// Create a resolver whose default base is the process working
    /// directory captured at construction time.
    pub fn new(gateway: Arc<dyn AsyncFsGateway>) -> Self {
        let default_dir = std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(String::from))
            .unwrap_or_else(|| String::from("/"));
        Self::with_default_dir(gateway, default_dir)
    }

    /// Create a resolver with an explicit default base directory.
    pub fn with_default_dir(
        gateway: Arc<dyn AsyncFsGateway>,
        default_dir: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            default_dir: default_dir.into(),
        }
    }

    /// Resolve `input` against `base` into an existing absolute path.
    ///
    /// # Arguments
    /// * `base` - Working directory to resolve relative input against;
    ///   `None` uses the resolver's default
    /// * `input` - Typed path, relative or absolute
    ///
    /// # Returns
    /// The canonical absolute path, or `InvalidPath` for empty input,
    /// `NotFound` when the normalized path does not exist, `Gateway` on
    /// I/O failure.
    pub async fn resolve(&self, base: Option<&str>, input: &str) -> NavResult<String> {
        self.resolve_inner(base, input, false).await
    }

    /// Like [`resolve`](Self::resolve), but additionally fails with
    /// `NotADirectory` when the target is not a directory.
    ///
    /// This is the variant `cd` uses, and the one the lister and the
    /// completion engine use for the directory part of their input.
    pub async fn resolve_dir(&self, base: Option<&str>, input: &str) -> NavResult<String> {
        self.resolve_inner(base, input, true).await
    }

    async fn resolve_inner(
        &self,
        base: Option<&str>,
        input: &str,
        require_dir: bool,
    ) -> NavResult<String> {
        if input.is_empty() {
            return Err(NavError::InvalidPath("empty path".to_string()));
        }

        let base = base.unwrap_or(&self.default_dir);
        let path = normalize(base, input);

        let stat = self.gateway.stat(&path).await?;
        if !stat.exists {
            return Err(NavError::NotFound(path));
        }
        if require_dir && !stat.is_directory {
            return Err(NavError::NotADirectory(path));
        }

        debug!("resolved '{}' against {} -> {}", input, base, path);
        Ok(path)
    }
}

/// Normalize `input` against `base` without touching the filesystem.
///
/// Segments are processed left to right: `.` is dropped, `..` pops the
/// last accumulated segment (a no-op at root), empty segments from
/// consecutive or trailing slashes are dropped. A leading `/` makes the
/// input absolute and `base` is ignored. Case is preserved.
pub fn normalize(base: &str, input: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    if !input.starts_with('/') {
        segments.extend(base.split('/').filter(|s| !s.is_empty()));
    }
    for segment in input.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        String::from("/")
    } else {
        let mut path = String::new();
        for segment in &segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}
