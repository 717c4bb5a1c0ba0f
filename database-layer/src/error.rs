use error_common::GameForgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

pub type DbResult<T> = Result<T, DatabaseError>;

impl From<DatabaseError> for GameForgeError {
    fn from(err: DatabaseError) -> Self {
        GameForgeError::DatabaseError(err.to_string())
    }
}
