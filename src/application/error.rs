// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// The message as the API caller should see it.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::Infrastructure(msg) => msg,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}
