use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    CoreError(#[from] linkcard_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
