use std::num::ParseIntError;

use changesets_sdk::{ChangesetsError, IdError};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid changeset id: {0}")]
    InvalidId(#[from] IdError),

    #[error("Invalid changeset number '{value}': {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Changeset not found: {id}")]
    NotFound { id: i64 },

    #[error("changeset does not exist in repository")]
    RepositoryMismatch { changeset_id: i64, repository_id: i64 },

    #[error("Invalid changeset settings: {0}")]
    InvalidSettings(#[source] serde_json::Error),

    #[error(transparent)]
    Repository(anyhow::Error),

    #[error(transparent)]
    Comparison(anyhow::Error),

    #[error("Storage error: {0}")]
    Storage(#[source] anyhow::Error),

    #[error("Access denied: {action} on {resource}")]
    AccessDenied {
        resource: &'static str,
        action: &'static str,
    },
}

impl DomainError {
    pub fn invalid_number(value: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidNumber {
            value: value.into(),
            source,
        }
    }

    #[must_use]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    #[must_use]
    pub fn repository_mismatch(changeset_id: i64, repository_id: i64) -> Self {
        Self::RepositoryMismatch {
            changeset_id,
            repository_id,
        }
    }
}

impl From<DomainError> for ChangesetsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidId(err) => Self::invalid_identifier(err.to_string()),
            DomainError::InvalidNumber { value, .. } => Self::invalid_number(value),
            DomainError::NotFound { id } => Self::not_found(id),
            DomainError::RepositoryMismatch {
                changeset_id,
                repository_id,
            } => Self::repository_mismatch(changeset_id, repository_id),
            DomainError::InvalidSettings(err) => Self::invalid_settings(err.to_string()),
            DomainError::Repository(err) => Self::Repository {
                message: err.to_string(),
            },
            DomainError::Comparison(err) => Self::Comparison {
                message: err.to_string(),
            },
            DomainError::AccessDenied { resource, action } => Self::access_denied(resource, action),
            DomainError::Storage(_) => Self::internal(),
        }
    }
}
