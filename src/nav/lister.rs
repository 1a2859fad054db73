//! Directory listing in deterministic order.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::NavResult;
use crate::gateway::{AsyncFsGateway, DirectoryEntry};
use crate::nav::PathResolver;

/// Lists the immediate children of a resolved directory.
///
/// The result is keyed by absolute child path; `BTreeMap` iteration gives
/// the ascending byte-wise order the shell presents, with directories and
/// files interleaved by name rather than grouped by type.
#[derive(Clone)]
pub struct DirectoryLister {
    gateway: Arc<dyn AsyncFsGateway>,
    resolver: PathResolver,
}

impl DirectoryLister {
    pub fn new(gateway: Arc<dyn AsyncFsGateway>) -> Self {
        Self {
            resolver: PathResolver::new(gateway.clone()),
            gateway,
        }
    }

    /// Create a lister that shares an existing resolver's default base.
    pub fn with_resolver(gateway: Arc<dyn AsyncFsGateway>, resolver: PathResolver) -> Self {
        Self { gateway, resolver }
    }

    /// Resolve `input` against `base` and enumerate the target's children.
    ///
    /// Resolution failures propagate unchanged. Single level only, no
    /// recursion.
    pub async fn list(
        &self,
        base: Option<&str>,
        input: &str,
    ) -> NavResult<BTreeMap<String, DirectoryEntry>> {
        let target = self.resolver.resolve_dir(base, input).await?;
        let children = self.gateway.read_dir(&target).await?;

        let mut entries = BTreeMap::new();
        for child in children {
            entries.insert(child.path.clone(), child);
        }

        debug!("list {} -> {} entries", target, entries.len());
        Ok(entries)
    }
}
