use thiserror::Error;

/// Simplified error enum for common use cases
#[derive(Error, Debug)]
pub enum GameForgeError {
    /// Referenced entity missing or owned by another user
    #[error("Not found: {0}")]
    NotFound(String),

    /// Filesystem write/remove errors
    #[error("I/O failure: {0}")]
    IoFailure(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Template processing errors
    #[error("Template error: {0}")]
    TemplateError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for GameForge operations
pub type Result<T> = std::result::Result<T, GameForgeError>;

/// Async logging function for errors
pub async fn log_error(context: &str, error: &GameForgeError) {
    tracing::error!(
        context = context,
        error = %error,
        "GameForge error occurred"
    );
}
