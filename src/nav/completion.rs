//! Readline-style path completion.
//!
//! A typed fragment is split at its last `/` into the directory to search
//! and the name prefix to filter by. Matching children then collapse into
//! candidates using their longest common prefix:
//! - a single match yields the unambiguous remainder, `/`-suffixed when it
//!   is a directory
//! - several matches that share text beyond the typed prefix yield that
//!   shared extension as one candidate
//! - several matches that diverge immediately yield every basename, for
//!   the line editor to display as a disambiguation list
//!
//! A candidate mapped to `true` is terminal: a complete non-directory
//! token with no further typing expected.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::NavResult;
use crate::gateway::{AsyncFsGateway, DirectoryEntry};
use crate::nav::PathResolver;

/// Computes completion candidates for partially typed paths.
#[derive(Clone)]
pub struct CompletionEngine {
    gateway: Arc<dyn AsyncFsGateway>,
    resolver: PathResolver,
}

impl CompletionEngine {
    pub fn new(gateway: Arc<dyn AsyncFsGateway>) -> Self {
        Self {
            resolver: PathResolver::new(gateway.clone()),
            gateway,
        }
    }

    /// Create an engine that shares an existing resolver's default base.
    pub fn with_resolver(gateway: Arc<dyn AsyncFsGateway>, resolver: PathResolver) -> Self {
        Self { gateway, resolver }
    }

    /// Complete `fragment` against `base`.
    ///
    /// # Returns
    /// An ordered `key -> is_terminal` mapping. Keys in the single-match
    /// and shared-extension cases are relative to what was already typed,
    /// ready for insertion at the cursor; keys in the divergent case are
    /// full basenames for display. No matching children is an empty
    /// mapping, not an error. Failures resolving the directory part
    /// propagate unchanged.
    pub async fn complete(
        &self,
        base: Option<&str>,
        fragment: &str,
    ) -> NavResult<BTreeMap<String, bool>> {
        let (dir_part, prefix) = split_fragment(fragment);
        let dir_input = if dir_part.is_empty() { "." } else { dir_part };
        let target = self.resolver.resolve_dir(base, dir_input).await?;

        let children = self.gateway.read_dir(&target).await?;
        let matches: Vec<&DirectoryEntry> = children
            .iter()
            .filter(|entry| entry.basename().starts_with(prefix))
            .collect();
        debug!(
            "complete '{}' in {} -> {} of {} children match",
            fragment,
            target,
            matches.len(),
            children.len()
        );

        let mut candidates = BTreeMap::new();
        if matches.is_empty() {
            return Ok(candidates);
        }

        if let [only] = matches.as_slice() {
            // Unambiguous: hand back what remains to be typed. An exact
            // directory match still yields "/", never an empty key.
            let remainder = &only.basename()[prefix.len()..];
            if only.is_directory {
                candidates.insert(format!("{remainder}/"), false);
            } else {
                candidates.insert(remainder.to_string(), true);
            }
            return Ok(candidates);
        }

        let names: Vec<&str> = matches.iter().map(|entry| entry.basename()).collect();
        let lcp = longest_common_prefix(&names);
        if lcp.len() > prefix.len() {
            // The shared extension is insertable even though the final
            // token is still ambiguous; no trailing marker on a partial
            // name.
            candidates.insert(lcp[prefix.len()..].to_string(), false);
        } else {
            // Matches diverge right after the typed text: list them all,
            // unstripped.
            for entry in &matches {
                if entry.is_directory {
                    candidates.insert(format!("{}/", entry.basename()), false);
                } else {
                    candidates.insert(entry.basename().to_string(), true);
                }
            }
        }
        Ok(candidates)
    }
}

/// Split a fragment at its last `/` into directory part (through the
/// slash) and prefix part.
fn split_fragment(fragment: &str) -> (&str, &str) {
    match fragment.rfind('/') {
        Some(idx) => (&fragment[..=idx], &fragment[idx + 1..]),
        None => ("", fragment),
    }
}

/// Longest string that is a byte-wise prefix of every name.
fn longest_common_prefix<'a>(names: &[&'a str]) -> &'a str {
    let Some(first) = names.first() else {
        return "";
    };
    let mut len = first.len();
    for name in &names[1..] {
        let shared = first
            .bytes()
            .zip(name.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        len = len.min(shared);
    }
    // never cut a multi-byte character in half
    while len > 0 && !first.is_char_boundary(len) {
        len -= 1;
    }
    &first[..len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;
    use crate::gateway::MemoryFsGateway;

    fn sample_tree() -> Arc<MemoryFsGateway> {
        Arc::new(
            MemoryFsGateway::new()
                .with_dir("/work/foo11/bar11")
                .with_dir("/work/foo11/bar22")
                .with_file("/work/foo11/bar33")
                .with_dir("/work/foo22")
                .with_file("/work/foo33"),
        )
    }

    fn engine() -> CompletionEngine {
        CompletionEngine::new(sample_tree())
    }

    fn expect(pairs: &[(&str, bool)]) -> BTreeMap<String, bool> {
        pairs
            .iter()
            .map(|(key, terminal)| (key.to_string(), *terminal))
            .collect()
    }

    #[test]
    fn test_split_fragment() {
        assert_eq!(split_fragment("foo"), ("", "foo"));
        assert_eq!(split_fragment("foo11/bar"), ("foo11/", "bar"));
        assert_eq!(split_fragment("foo11/"), ("foo11/", ""));
        assert_eq!(split_fragment("/etc"), ("/", "etc"));
        assert_eq!(split_fragment(""), ("", ""));
    }

    #[test]
    fn test_longest_common_prefix() {
        assert_eq!(longest_common_prefix(&["foo11", "foo22", "foo33"]), "foo");
        assert_eq!(longest_common_prefix(&["bar", "bar"]), "bar");
        assert_eq!(longest_common_prefix(&["abc", "xyz"]), "");
        assert_eq!(longest_common_prefix(&[]), "");
    }

    #[test]
    fn test_longest_common_prefix_respects_char_boundaries() {
        // "α" and "β" share their first UTF-8 byte but no full character
        assert_eq!(longest_common_prefix(&["αx", "βy"]), "");
        assert_eq!(longest_common_prefix(&["αx", "αy"]), "α");
    }

    #[tokio::test]
    async fn test_single_exact_directory_match() {
        let candidates = engine().complete(Some("/work"), "foo11").await.unwrap();
        assert_eq!(candidates, expect(&[("/", false)]));
    }

    #[tokio::test]
    async fn test_single_prefix_match() {
        let candidates = engine().complete(Some("/work"), "foo1").await.unwrap();
        assert_eq!(candidates, expect(&[("1/", false)]));
    }

    #[tokio::test]
    async fn test_single_exact_file_match_is_terminal() {
        let candidates = engine().complete(Some("/work"), "foo33").await.unwrap();
        assert_eq!(candidates, expect(&[("", true)]));
    }

    #[tokio::test]
    async fn test_divergent_matches_list_all_basenames() {
        let candidates = engine().complete(Some("/work"), "foo").await.unwrap();
        assert_eq!(
            candidates,
            expect(&[("foo11/", false), ("foo22/", false), ("foo33", true)])
        );
    }

    #[tokio::test]
    async fn test_empty_fragment_yields_shared_extension() {
        let candidates = engine().complete(Some("/work"), "").await.unwrap();
        assert_eq!(candidates, expect(&[("foo", false)]));
    }

    #[tokio::test]
    async fn test_completes_inside_subdirectory() {
        let candidates = engine().complete(Some("/work"), "foo11/").await.unwrap();
        assert_eq!(candidates, expect(&[("bar", false)]));
    }

    #[tokio::test]
    async fn test_divergent_matches_inside_subdirectory() {
        let candidates = engine().complete(Some("/work"), "foo11/bar").await.unwrap();
        assert_eq!(
            candidates,
            expect(&[("bar11/", false), ("bar22/", false), ("bar33", true)])
        );
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_success() {
        let candidates = engine().complete(Some("/work"), "zzz").await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_absolute_fragment_ignores_base() {
        let candidates = engine().complete(Some("/"), "/work/foo1").await.unwrap();
        assert_eq!(candidates, expect(&[("1/", false)]));
    }

    #[tokio::test]
    async fn test_missing_directory_part_propagates() {
        let err = engine()
            .complete(Some("/work"), "gone/x")
            .await
            .unwrap_err();
        assert!(matches!(err, NavError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_file_directory_part_propagates() {
        let err = engine()
            .complete(Some("/work"), "foo33/x")
            .await
            .unwrap_err();
        assert!(matches!(err, NavError::NotADirectory(_)));
    }

    #[tokio::test]
    async fn test_multibyte_names_complete_without_splitting() {
        let fs = Arc::new(
            MemoryFsGateway::new()
                .with_dir("/work/αlpha")
                .with_dir("/work/βeta"),
        );
        let candidates = CompletionEngine::new(fs)
            .complete(Some("/work"), "")
            .await
            .unwrap();
        assert_eq!(candidates, expect(&[("αlpha/", false), ("βeta/", false)]));
    }
}
