//! Cancellable operations support for navsh.
//!
//! This module provides infrastructure to abandon long-running filesystem
//! operations when the user presses Ctrl+C. It works by:
//!
//! 1. Listening for cancellation signals (via `CancellationToken`)
//! 2. Racing the operation future against the token
//! 3. Dropping the operation future if cancellation wins

use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::error::{ExecutionError, NavResult, NavshError, Result};

/// Execute a navigation operation with cancellation support.
///
/// - If the operation completes first, its result is returned (errors included)
/// - If `cancel_token` is triggered (e.g. by Ctrl+C), the operation future is
///   dropped and a `Cancelled` error is returned
///
/// # Arguments
/// * `cancel_token` - Token that will be triggered on Ctrl+C or other cancellation
/// * `operation` - Async operation performing the filesystem work
///
/// # Returns
/// * `Ok(T)` if the operation completed first
/// * `Err(ExecutionError::Cancelled)` if cancelled by user
/// * `Err(...)` for operation errors
pub async fn run_cancellable<T>(
    cancel_token: CancellationToken,
    operation: BoxFuture<'_, NavResult<T>>,
) -> Result<T> {
    tokio::select! {
        result = operation => {
            result.map_err(NavshError::from)
        }
        _ = cancel_token.cancelled() => {
            Err(NavshError::Execution(ExecutionError::Cancelled(
                "Operation cancelled by user (Ctrl+C)".to_string(),
            )))
        }
    }
}
