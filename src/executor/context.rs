//! Execution context management
//!
//! This module provides the ExecutionContext which maintains state across
//! command executions: the navigation engines, the shared working directory
//! and the cancellation token for the in-flight command.

use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{NavshError, Result};
use crate::gateway::AsyncFsGateway;
use crate::nav::{CompletionEngine, DirectoryLister, PathResolver};
use crate::parser::Command;
use crate::repl::SharedState;

use super::killable::run_cancellable;
use super::result::{ExecutionResult, ExecutionStats, ResultData};

/// Execution context that maintains state across commands
#[derive(Clone)]
pub struct ExecutionContext {
    /// Filesystem gateway shared by the engines
    gateway: Arc<dyn AsyncFsGateway>,

    /// Path resolver
    resolver: PathResolver,

    /// Directory lister
    lister: DirectoryLister,

    /// Completion engine
    completion: CompletionEngine,

    /// Shared state with REPL
    pub(crate) shared_state: SharedState,

    /// Cancellation token for the currently running command
    cancel_token: CancellationToken,
}

impl ExecutionContext {
    /// Create a new execution context
    ///
    /// # Arguments
    /// * `gateway` - Filesystem gateway
    /// * `shared_state` - Shared state with REPL
    ///
    /// # Returns
    /// * `Self` - New execution context
    pub fn new(gateway: Arc<dyn AsyncFsGateway>, shared_state: SharedState) -> Self {
        let resolver =
            PathResolver::with_default_dir(gateway.clone(), shared_state.get_working_dir());
        let lister = DirectoryLister::with_resolver(gateway.clone(), resolver.clone());
        let completion = CompletionEngine::with_resolver(gateway.clone(), resolver.clone());

        Self {
            gateway,
            resolver,
            lister,
            completion,
            shared_state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Replace the cancellation token before running a new command
    pub fn reset_cancel_token(&mut self) {
        self.cancel_token = CancellationToken::new();
    }

    /// Get a clone of the current cancellation token
    ///
    /// # Returns
    /// * `CancellationToken` - Token that cancels the in-flight command
    pub fn get_cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Get current working directory
    pub fn get_working_dir(&self) -> String {
        self.shared_state.get_working_dir()
    }

    /// Execute a parsed command
    ///
    /// Navigation failures (missing paths, non-directories) are reported as
    /// unsuccessful results so they can go through the formatter; cancellation
    /// and infrastructure errors propagate as `Err`.
    ///
    /// # Arguments
    /// * `command` - Parsed command to execute
    ///
    /// # Returns
    /// * `Result<ExecutionResult>` - Execution result or error
    pub async fn execute(&self, command: Command) -> Result<ExecutionResult> {
        debug!("executing command: {}", command.verb());

        match command {
            Command::Pwd => self.execute_pwd(),
            Command::Cd(target) => self.execute_cd(target).await,
            Command::Ls(target) => self.execute_ls(target).await,
            Command::Help(topic) => self.execute_help(topic.as_deref()),
            Command::Exit => Ok(ExecutionResult::success_message("Goodbye!")),
        }
    }

    /// Print the current working directory
    fn execute_pwd(&self) -> Result<ExecutionResult> {
        let cwd = self.shared_state.get_working_dir();
        Ok(ExecutionResult::success(
            ResultData::Path(cwd),
            ExecutionStats::default(),
        ))
    }

    /// Change the working directory
    ///
    /// A bare `cd` returns to the directory the session started in. The
    /// target is validated before the shared state is updated, so a failed
    /// `cd` leaves the working directory untouched.
    async fn execute_cd(&self, target: Option<String>) -> Result<ExecutionResult> {
        let start = Instant::now();
        let cwd = self.shared_state.get_working_dir();
        let input = match target {
            Some(t) => t,
            None => self.shared_state.start_dir().to_string(),
        };

        let resolved = run_cancellable(
            self.cancel_token.clone(),
            self.resolver.resolve_dir(Some(&cwd), &input).boxed(),
        )
        .await;

        match resolved {
            Ok(path) => {
                self.shared_state.set_working_dir(path);
                Ok(ExecutionResult::success(
                    ResultData::None,
                    ExecutionStats {
                        execution_time_ms: start.elapsed().as_millis() as u64,
                        entries_returned: 0,
                    },
                ))
            }
            Err(NavshError::Nav(e)) => Ok(ExecutionResult::error(e.to_string())),
            Err(e) => Err(e),
        }
    }

    /// List the contents of a directory
    async fn execute_ls(&self, target: Option<String>) -> Result<ExecutionResult> {
        let start = Instant::now();
        let cwd = self.shared_state.get_working_dir();
        let input = target.unwrap_or_else(|| ".".to_string());

        let listed = run_cancellable(
            self.cancel_token.clone(),
            self.lister.list(Some(&cwd), &input).boxed(),
        )
        .await;

        match listed {
            Ok(entries) => {
                let count = entries.len();
                Ok(ExecutionResult::success(
                    ResultData::Listing(entries),
                    ExecutionStats {
                        execution_time_ms: start.elapsed().as_millis() as u64,
                        entries_returned: count,
                    },
                ))
            }
            Err(NavshError::Nav(e)) => Ok(ExecutionResult::error(e.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Show help for all commands or a single topic
    fn execute_help(&self, topic: Option<&str>) -> Result<ExecutionResult> {
        let text = match topic {
            None => GENERAL_HELP.to_string(),
            Some(t) => match command_help(t) {
                Some(help) => help.to_string(),
                None => format!("No help available for '{t}'"),
            },
        };

        Ok(ExecutionResult::success(
            ResultData::Message(text),
            ExecutionStats::default(),
        ))
    }

    /// Run path completion for a fragment against the current working directory.
    ///
    /// Used by the REPL completer; failures surface as an empty candidate set
    /// there, so this returns the raw navigation result.
    pub async fn complete_path(
        &self,
        fragment: &str,
    ) -> crate::error::NavResult<std::collections::BTreeMap<String, bool>> {
        let cwd = self.shared_state.get_working_dir();
        self.completion.complete(Some(&cwd), fragment).await
    }

    /// Get the filesystem gateway
    pub fn gateway(&self) -> Arc<dyn AsyncFsGateway> {
        self.gateway.clone()
    }

    /// Get the path resolver
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }
}

const GENERAL_HELP: &str = "Available commands:
  cd [DIR]     Change the working directory
  ls [DIR]     List directory contents
  pwd          Print the working directory
  help [CMD]   Show help for a command
  exit         Leave the shell";

/// Help text for a single command verb
fn command_help(topic: &str) -> Option<&'static str> {
    match topic {
        "cd" => Some(
            "cd [DIR]\n  Change the working directory.\n  Without an argument, returns to the directory the session started in.",
        ),
        "ls" => Some(
            "ls [DIR]\n  List the contents of DIR (or the working directory) in ascending name order.\n  Directory entries are marked with a trailing '/'.",
        ),
        "pwd" => Some("pwd\n  Print the canonical absolute path of the working directory."),
        "help" => Some("help [CMD]\n  Show the command list, or detailed help for CMD."),
        "exit" | "quit" => Some("exit\n  Leave the shell."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MemoryFsGateway;

    fn test_context() -> ExecutionContext {
        let gateway = MemoryFsGateway::new()
            .with_dir("/work")
            .with_dir("/work/src")
            .with_file("/work/README.md")
            .with_dir("/elsewhere");
        let shared_state = SharedState::new("/work".to_string());
        ExecutionContext::new(Arc::new(gateway), shared_state)
    }

    #[tokio::test]
    async fn test_execute_pwd() {
        let context = test_context();
        let result = context.execute(Command::Pwd).await.unwrap();
        assert!(result.success);
        assert!(matches!(result.data, ResultData::Path(ref p) if p == "/work"));
    }

    #[tokio::test]
    async fn test_execute_cd_updates_working_dir() {
        let context = test_context();
        let result = context
            .execute(Command::Cd(Some("src".to_string())))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(context.get_working_dir(), "/work/src");
    }

    #[tokio::test]
    async fn test_execute_cd_missing_reports_error() {
        let context = test_context();
        let result = context
            .execute(Command::Cd(Some("nope".to_string())))
            .await
            .unwrap();
        assert!(!result.success);
        assert!(result.error.unwrap().contains("/work/nope"));
        // Working directory is unchanged after a failed cd
        assert_eq!(context.get_working_dir(), "/work");
    }

    #[tokio::test]
    async fn test_execute_cd_to_file_reports_error() {
        let context = test_context();
        let result = context
            .execute(Command::Cd(Some("README.md".to_string())))
            .await
            .unwrap();
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Not a directory"));
    }

    #[tokio::test]
    async fn test_execute_cd_bare_returns_to_start() {
        let context = test_context();
        context
            .execute(Command::Cd(Some("/elsewhere".to_string())))
            .await
            .unwrap();
        assert_eq!(context.get_working_dir(), "/elsewhere");

        let result = context.execute(Command::Cd(None)).await.unwrap();
        assert!(result.success);
        assert_eq!(context.get_working_dir(), "/work");
    }

    #[tokio::test]
    async fn test_execute_ls_lists_entries() {
        let context = test_context();
        let result = context.execute(Command::Ls(None)).await.unwrap();
        assert!(result.success);
        assert_eq!(result.stats.entries_returned, 2);

        match result.data {
            ResultData::Listing(entries) => {
                let paths: Vec<_> = entries.keys().cloned().collect();
                assert_eq!(paths, vec!["/work/README.md", "/work/src"]);
            }
            other => panic!("expected listing, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_ls_missing_reports_error() {
        let context = test_context();
        let result = context
            .execute(Command::Ls(Some("ghosts".to_string())))
            .await
            .unwrap();
        assert!(!result.success);
        assert!(
            result
                .error
                .unwrap()
                .contains("No such file or directory")
        );
    }

    #[tokio::test]
    async fn test_execute_help_topics() {
        let context = test_context();

        let result = context.execute(Command::Help(None)).await.unwrap();
        assert!(matches!(result.data, ResultData::Message(ref m) if m.contains("pwd")));

        let result = context
            .execute(Command::Help(Some("cd".to_string())))
            .await
            .unwrap();
        assert!(matches!(result.data, ResultData::Message(ref m) if m.contains("cd [DIR]")));

        let result = context
            .execute(Command::Help(Some("bogus".to_string())))
            .await
            .unwrap();
        assert!(matches!(result.data, ResultData::Message(ref m) if m.contains("No help")));
    }

    #[tokio::test]
    async fn test_cancelled_command_propagates() {
        let context = test_context();
        context.get_cancel_token().cancel();

        // A pre-cancelled token may still lose the select race against an
        // operation that is immediately ready, so only check the error shape
        // when cancellation actually won.
        if let Err(e) = context.execute(Command::Ls(None)).await {
            assert!(e.to_string().contains("cancelled"));
        }
    }

    #[tokio::test]
    async fn test_complete_path_from_context() {
        let context = test_context();
        let candidates = context.complete_path("R").await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates.get("EADME.md"), Some(&true));
    }
}
