//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures surfaced by the service.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A mandatory field or argument was missing from the input.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The referenced entity does not exist (the post for update/delete,
    /// the directory user for create).
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Store failure that is not an explicit absence; passed through untouched.
    #[error(transparent)]
    Store(#[from] RepoError),

    /// Directory failure that is not an explicit absence; passed through untouched.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    Constraint(String),
}

/// User-directory lookup errors.
///
/// An explicit "no such user" answer from the directory is not an error;
/// that is `Ok(None)` on the port. Everything else ends up here.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("user directory request failed: {0}")]
    Transport(String),

    #[error("user directory returned status {0}")]
    Status(u16),

    #[error("user directory response could not be decoded: {0}")]
    Decode(String),
}
