use std::sync::Arc;

use async_trait::async_trait;
use changesets_sdk::{
    Changeset, ChangesetsClientV1, ChangesetsError, Repository, RepositoryComparison,
    SecurityContext,
};

use crate::domain::service::Service;

/// Local implementation of `ChangesetsClientV1`.
///
/// Converts `DomainError` into `ChangesetsError` at the SDK boundary.
pub struct ChangesetsLocalClient {
    service: Arc<Service>,
}

impl ChangesetsLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ChangesetsClientV1 for ChangesetsLocalClient {
    async fn get_changeset_by_id(
        &self,
        ctx: &SecurityContext,
        id: &str,
    ) -> Result<Changeset, ChangesetsError> {
        self.service
            .get_changeset_by_id(ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn get_changeset(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<Changeset, ChangesetsError> {
        self.service.get_changeset(ctx, id).await.map_err(Into::into)
    }

    async fn get_changeset_in_repository(
        &self,
        ctx: &SecurityContext,
        repository_id: &str,
        number: &str,
    ) -> Result<Changeset, ChangesetsError> {
        self.service
            .get_changeset_in_repository(ctx, repository_id, number)
            .await
            .map_err(Into::into)
    }

    async fn get_changeset_repository(
        &self,
        ctx: &SecurityContext,
        changeset: &Changeset,
    ) -> Result<Repository, ChangesetsError> {
        self.service
            .changeset_repository(ctx, changeset)
            .await
            .map_err(Into::into)
    }

    async fn get_changeset_url(
        &self,
        ctx: &SecurityContext,
        changeset: &Changeset,
    ) -> Result<String, ChangesetsError> {
        self.service
            .changeset_url(ctx, changeset)
            .await
            .map_err(Into::into)
    }

    async fn get_repository_comparison(
        &self,
        ctx: &SecurityContext,
        changeset: &Changeset,
    ) -> Result<Option<RepositoryComparison>, ChangesetsError> {
        self.service
            .repository_comparison(ctx, changeset)
            .await
            .map_err(Into::into)
    }
}
