use thiserror::Error;

/// Contact store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Contact store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
