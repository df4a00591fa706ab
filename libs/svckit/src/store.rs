//! Storage error shared by repository traits

use sea_orm::{DbErr, SqlErr};

/// Error returned by repository implementations.
///
/// Unique-index violations are surfaced as [`StoreError::UniqueViolation`]
/// so services can report them as conflicts: the index, not a prior
/// existence check, is what guarantees uniqueness.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("record not found")]
    NotFound,

    #[error(transparent)]
    Database(anyhow::Error),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(constraint)) = err.sql_err() {
            return Self::UniqueViolation(constraint);
        }
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::NotFound,
            other => Self::Database(other.into()),
        }
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err)
    }
}
