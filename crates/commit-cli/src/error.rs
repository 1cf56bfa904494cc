//! Error types for commit-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from commit-core
    #[error(transparent)]
    Core(#[from] commit_core::Error),

    /// Error from commit-github
    #[error(transparent)]
    Github(#[from] commit_github::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed inputs file
    #[error("Invalid inputs file: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON rendering failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
