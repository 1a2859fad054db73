use std::{fmt, io};

/// Crate-wide `Result` type using [`NavshError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, NavshError>;

/// `Result` type for navigation-engine operations using [`NavError`].
///
/// The resolver, lister and completion engine fail with exactly one of the
/// [`NavError`] kinds; higher layers convert into [`NavshError`] via `?`.
pub type NavResult<T> = std::result::Result<T, NavError>;

/// Top-level error type for navsh operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum NavshError {
    /// Path navigation errors.
    Nav(NavError),

    /// Command parsing errors.
    Parse(ParseError),

    /// Command execution errors.
    Execution(ExecutionError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Navigation-specific errors.
///
/// The closed set of failure kinds for path resolution, directory listing
/// and completion. Every engine operation fails with exactly one of these.
#[derive(Debug)]
pub enum NavError {
    /// Input path is syntactically unusable (e.g. empty).
    InvalidPath(String),

    /// Resolved path does not exist.
    NotFound(String),

    /// Resolved path exists but is not a directory where one is required.
    NotADirectory(String),

    /// Underlying filesystem gateway failure.
    Gateway(io::Error),
}

/// Parsing-specific errors.
#[derive(Debug)]
pub enum ParseError {
    /// Invalid command format.
    InvalidCommand(String),

    /// Command received an argument it does not take.
    UnexpectedArgument { command: String, argument: String },
}

/// Execution-specific errors.
#[derive(Debug)]
pub enum ExecutionError {
    /// Operation abandoned by the user (Ctrl+C).
    Cancelled(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for NavshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavshError::Nav(e) => write!(f, "{e}"),
            NavshError::Parse(e) => write!(f, "{e}"),
            NavshError::Execution(e) => write!(f, "{e}"),
            NavshError::Config(e) => write!(f, "Configuration error: {e}"),
            NavshError::Io(e) => write!(f, "I/O error: {e}"),
            NavshError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            NavError::NotFound(path) => write!(f, "No such file or directory: {path}"),
            NavError::NotADirectory(path) => write!(f, "Not a directory: {path}"),
            NavError::Gateway(e) => write!(f, "Filesystem error: {e}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidCommand(cmd) => write!(f, "Unknown command: {cmd}"),
            ParseError::UnexpectedArgument { command, argument } => {
                write!(f, "'{command}' takes no argument, got '{argument}'")
            }
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::Cancelled(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for NavshError {}
impl std::error::Error for NavError {}
impl std::error::Error for ParseError {}
impl std::error::Error for ExecutionError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to NavshError ========================= */

impl From<io::Error> for NavshError {
    fn from(err: io::Error) -> Self {
        NavshError::Io(err)
    }
}

impl From<NavError> for NavshError {
    fn from(err: NavError) -> Self {
        NavshError::Nav(err)
    }
}

impl From<ParseError> for NavshError {
    fn from(err: ParseError) -> Self {
        NavshError::Parse(err)
    }
}

impl From<ExecutionError> for NavshError {
    fn from(err: ExecutionError) -> Self {
        NavshError::Execution(err)
    }
}

impl From<ConfigError> for NavshError {
    fn from(err: ConfigError) -> Self {
        NavshError::Config(err)
    }
}

impl From<String> for NavshError {
    fn from(msg: String) -> Self {
        NavshError::Generic(msg)
    }
}

impl From<&str> for NavshError {
    fn from(msg: &str) -> Self {
        NavshError::Generic(msg.to_owned())
    }
}
