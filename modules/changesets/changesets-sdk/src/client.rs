//! `ChangesetsClientV1` trait definition.
//!
//! Object-safe client for inter-module consumption. All methods take the
//! caller's `SecurityContext`, which is checked against the module's policy
//! engine before any lookup happens.

use async_trait::async_trait;

use crate::errors::ChangesetsError;
use crate::models::{Changeset, Repository, RepositoryComparison};
use crate::security::SecurityContext;

#[async_trait]
pub trait ChangesetsClientV1: Send + Sync {
    /// Get a changeset by its opaque external id.
    async fn get_changeset_by_id(
        &self,
        ctx: &SecurityContext,
        id: &str,
    ) -> Result<Changeset, ChangesetsError>;

    /// Get a changeset by its database id.
    async fn get_changeset(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<Changeset, ChangesetsError>;

    /// Get a changeset by number, asserting it belongs to the given repository.
    async fn get_changeset_in_repository(
        &self,
        ctx: &SecurityContext,
        repository_id: &str,
        number: &str,
    ) -> Result<Changeset, ChangesetsError>;

    /// Resolve the repository a changeset belongs to.
    async fn get_changeset_repository(
        &self,
        ctx: &SecurityContext,
        changeset: &Changeset,
    ) -> Result<Repository, ChangesetsError>;

    /// Build the changeset's URL path under its repository.
    async fn get_changeset_url(
        &self,
        ctx: &SecurityContext,
        changeset: &Changeset,
    ) -> Result<String, ChangesetsError>;

    /// Compare the revisions named in the changeset's settings, if any.
    async fn get_repository_comparison(
        &self,
        ctx: &SecurityContext,
        changeset: &Changeset,
    ) -> Result<Option<RepositoryComparison>, ChangesetsError>;
}
