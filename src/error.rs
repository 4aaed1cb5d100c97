use std::fmt;

/// Custom error type for shell operations
///
/// Commands only ever surface `Validation` and `Http`; the remaining variants
/// exist for process startup (config loading, filesystem access) and never
/// cross the command boundary.
#[derive(Debug)]
pub enum ShellError {
    /// Bad user input, raised before any network activity
    Validation {
        field: String,
        message: String,
        help: String,
    },
    /// Remote or transport failure, raised after at least one network attempt
    Http { code: u16, message: String },
    /// Configuration error
    Config(String),
    /// Filesystem error
    Io(String),
}

impl ShellError {
    /// Build a validation error for a named field, embedding a command's help text
    pub fn validation(field: &str, message: &str, help: String) -> Self {
        ShellError::Validation {
            field: field.to_string(),
            message: message.to_string(),
            help,
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Validation { field, message, .. } => {
                write!(f, "Invalid value for \"{}\": {}", field, message)
            }
            ShellError::Http { code, message } => write!(f, "HTTP error {}: {}", code, message),
            ShellError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ShellError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::Config(err.to_string())
    }
}

/// Result type alias for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;
