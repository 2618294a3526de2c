//! Error types for the domain layer and its ports.

use thiserror::Error;

/// Content-model failures.
///
/// Raised by [`crate::domain::Post::prepare_for_save`] when a post is not
/// fit to persist.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The store rejected or failed to execute a query.
    #[error("Query execution failed: {0}")]
    Query(String),

    /// The targeted entity does not exist.
    #[error("Entity not found")]
    NotFound,

    /// A uniqueness or foreign-key constraint was violated.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}
