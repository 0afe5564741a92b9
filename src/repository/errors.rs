use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors produced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The connection pool could not hand out a connection.
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A unique constraint rejected the write.
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
    /// A stored row no longer satisfies the domain constraints.
    #[error("stored row failed validation: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => Self::UniqueViolation(info.message().to_string()),
            other => Self::Database(other),
        }
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        Self::Validation(err.to_string())
    }
}
