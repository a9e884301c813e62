use std::sync::Arc;

use changesets_sdk::{ChangesetsError, SecurityContext};

use super::changeset::ChangesetResolver;
use crate::domain::service::Service;

/// Query-root entry points for changesets.
#[derive(Clone)]
pub struct ChangesetQuery {
    service: Arc<Service>,
}

impl ChangesetQuery {
    #[must_use]
    pub(crate) fn new(service: Arc<Service>) -> Self {
        Self { service }
    }

    /// `changeset(id: ID!)`.
    ///
    /// # Errors
    /// `InvalidIdentifier` for a malformed or non-changeset id, `NotFound`
    /// when no such changeset exists, `AccessDenied` when the caller may not read.
    pub async fn changeset_by_id(
        &self,
        ctx: &SecurityContext,
        id: &str,
    ) -> Result<ChangesetResolver, ChangesetsError> {
        let changeset = self.service.get_changeset_by_id(ctx, id).await?;
        Ok(ChangesetResolver::new(Arc::clone(&self.service), changeset))
    }

    /// Lookup by database id, for resolvers of other entities that hold one.
    ///
    /// # Errors
    /// `NotFound` when no such changeset exists, `AccessDenied` when the
    /// caller may not read.
    pub async fn changeset_by_db_id(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<ChangesetResolver, ChangesetsError> {
        let changeset = self.service.get_changeset(ctx, id).await?;
        Ok(ChangesetResolver::new(Arc::clone(&self.service), changeset))
    }

    /// `changesetInRepository(repository: ID!, number: String!)`.
    ///
    /// # Errors
    /// `InvalidNumber` when `number` is not an integer, `RepositoryMismatch`
    /// when the changeset belongs to another repository, plus any error from
    /// the lookup or the repository resolver.
    pub async fn changeset_in_repository(
        &self,
        ctx: &SecurityContext,
        repository_id: &str,
        number: &str,
    ) -> Result<ChangesetResolver, ChangesetsError> {
        let changeset = self
            .service
            .get_changeset_in_repository(ctx, repository_id, number)
            .await?;
        Ok(ChangesetResolver::new(Arc::clone(&self.service), changeset))
    }
}
