use std::sync::PoisonError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// A poisoned dataset lock means a writer panicked mid-update; surface it as
/// an unexpected error rather than propagating the panic.
impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(err: PoisonError<T>) -> Self {
        RepositoryError::Unexpected(format!("dataset lock poisoned: {err}"))
    }
}
