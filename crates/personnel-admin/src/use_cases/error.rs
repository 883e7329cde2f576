use crate::domain::{NotFoundError, ValidationError};
use crate::repository::RepositoryError;

/// Error raised by every use case.
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    /// Caller misuse: a non-positive id. Always checked before anything else.
    #[error("Invalid {entity} ID")]
    InvalidId { entity: &'static str },
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store reported that a write did not take effect.
    #[error("Failed to {action} {entity}")]
    OperationFailed {
        action: &'static str,
        entity: &'static str,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            UseCaseError::Validation(error) => Some(error),
            _ => None,
        }
    }
}

pub type UseCaseResult<T> = Result<T, UseCaseError>;
