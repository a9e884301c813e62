use std::sync::Arc;

use changesets_sdk::{
    Changeset, ChangesetStatus, ChangesetsError, Repository, RepositoryComparison, SecurityContext,
};

use crate::domain::service::Service;

/// Resolver for the `Changeset` GraphQL type.
///
/// Wraps one record fetched at construction time. Scalar fields are plain
/// projections; `repository`, `url` and `repository_comparison` call out to
/// collaborators on demand.
#[derive(Clone)]
pub struct ChangesetResolver {
    service: Arc<Service>,
    changeset: Changeset,
}

impl ChangesetResolver {
    pub(crate) fn new(service: Arc<Service>, changeset: Changeset) -> Self {
        Self { service, changeset }
    }

    #[must_use]
    pub fn id(&self) -> String {
        self.changeset.gql_id()
    }

    #[must_use]
    pub fn db_id(&self) -> i64 {
        self.changeset.id
    }

    #[must_use]
    pub fn number(&self) -> String {
        self.changeset.number()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.changeset.title
    }

    #[must_use]
    pub fn external_url(&self) -> Option<&str> {
        self.changeset.external_url.as_deref()
    }

    #[must_use]
    pub fn settings(&self) -> &str {
        self.changeset.settings_json()
    }

    #[must_use]
    pub fn status(&self) -> ChangesetStatus {
        self.changeset.status
    }

    /// # Errors
    /// Whatever the repository resolver reports.
    pub async fn repository(&self, ctx: &SecurityContext) -> Result<Repository, ChangesetsError> {
        Ok(self
            .service
            .changeset_repository(ctx, &self.changeset)
            .await?)
    }

    /// # Errors
    /// Whatever the repository resolver reports.
    pub async fn url(&self, ctx: &SecurityContext) -> Result<String, ChangesetsError> {
        Ok(self.service.changeset_url(ctx, &self.changeset).await?)
    }

    /// `None` when the settings name no delta.
    ///
    /// # Errors
    /// `InvalidSettings` for a malformed settings blob, otherwise whatever the
    /// repository resolver or comparison service reports.
    pub async fn repository_comparison(
        &self,
        ctx: &SecurityContext,
    ) -> Result<Option<RepositoryComparison>, ChangesetsError> {
        Ok(self
            .service
            .repository_comparison(ctx, &self.changeset)
            .await?)
    }

    /// The underlying record.
    #[must_use]
    pub fn changeset(&self) -> &Changeset {
        &self.changeset
    }
}
