use error_common::GameForgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;

impl From<TemplateError> for GameForgeError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::Io(e) => GameForgeError::IoFailure(e.to_string()),
        }
    }
}
