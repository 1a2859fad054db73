//! Command execution engine
//!
//! This module executes parsed commands against the filesystem gateway,
//! tracks execution statistics and supports Ctrl+C cancellation of
//! in-flight operations.

mod context;
mod killable;
mod result;

pub use context::ExecutionContext;
pub use killable::run_cancellable;
pub use result::{ExecutionResult, ExecutionStats, ResultData};
