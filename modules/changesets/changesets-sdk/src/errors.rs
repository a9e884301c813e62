//! Public error types for the changesets module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `ChangesetsClientV1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChangesetsError {
    /// The external identifier is malformed or names another entity kind.
    #[error("Invalid identifier: {message}")]
    InvalidIdentifier { message: String },

    /// The changeset number is not a base-10 integer.
    #[error("Invalid changeset number: '{value}'")]
    InvalidNumber { value: String },

    /// No changeset exists with the given id.
    #[error("Changeset not found: {id}")]
    NotFound { id: i64 },

    /// The changeset exists but belongs to another repository.
    #[error("changeset does not exist in repository")]
    RepositoryMismatch { changeset_id: i64, repository_id: i64 },

    /// The stored settings blob is not valid settings JSON.
    #[error("Invalid changeset settings: {message}")]
    InvalidSettings { message: String },

    /// The repository resolver failed.
    #[error("{message}")]
    Repository { message: String },

    /// The comparison service failed.
    #[error("{message}")]
    Comparison { message: String },

    /// The caller may not perform the action.
    #[error("Access denied: {action} on {resource}")]
    AccessDenied { resource: String, action: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl ChangesetsError {
    /// Create an `InvalidIdentifier` error.
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            message: message.into(),
        }
    }

    /// Create an `InvalidNumber` error.
    pub fn invalid_number(value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            value: value.into(),
        }
    }

    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Create a `RepositoryMismatch` error.
    #[must_use]
    pub fn repository_mismatch(changeset_id: i64, repository_id: i64) -> Self {
        Self::RepositoryMismatch {
            changeset_id,
            repository_id,
        }
    }

    /// Create an `InvalidSettings` error.
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }

    /// Create an `AccessDenied` error.
    pub fn access_denied(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self::AccessDenied {
            resource: resource.into(),
            action: action.into(),
        }
    }

    /// Create an Internal error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
