//! Execution result types
//!
//! This module defines the data structures for representing command execution results:
//! - ExecutionResult: Overall result of a command execution
//! - ResultData: Various types of data that can be returned
//! - ExecutionStats: Statistics about the execution

use std::collections::BTreeMap;

use crate::gateway::DirectoryEntry;

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Success status
    pub success: bool,

    /// Result data (paths, listings, messages)
    pub data: ResultData,

    /// Execution statistics
    pub stats: ExecutionStats,

    /// Error message if failed
    pub error: Option<String>,
}

/// Data returned from command execution
#[derive(Debug, Clone)]
pub enum ResultData {
    /// A single canonical absolute path
    Path(String),

    /// Directory listing keyed by absolute child path
    Listing(BTreeMap<String, DirectoryEntry>),

    /// Text message
    Message(String),

    /// No data
    None,
}

/// Execution statistics
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    /// Execution time in milliseconds
    pub execution_time_ms: u64,

    /// Number of entries returned by a listing
    pub entries_returned: usize,
}

impl ExecutionResult {
    /// Create a successful result
    pub fn success(data: ResultData, stats: ExecutionStats) -> Self {
        Self {
            success: true,
            data,
            stats,
            error: None,
        }
    }

    /// Create a successful result carrying only a message
    pub fn success_message(message: &str) -> Self {
        Self {
            success: true,
            data: ResultData::Message(message.to_string()),
            stats: ExecutionStats::default(),
            error: None,
        }
    }

    /// Create a failed result
    pub fn error(error: String) -> Self {
        Self {
            success: false,
            data: ResultData::None,
            stats: ExecutionStats::default(),
            error: Some(error),
        }
    }
}
