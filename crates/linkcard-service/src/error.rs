use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    StoreError(#[from] linkcard_store::error::StoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
