//! Outbound collaborators owned by other modules.

use async_trait::async_trait;
use changesets_sdk::{Repository, RepositoryComparison, SecurityContext};

/// Resolves repository handles.
#[async_trait]
pub trait RepositoryResolver: Send + Sync {
    /// Resolve a repository from its opaque external id.
    async fn resolve_by_id(&self, ctx: &SecurityContext, id: &str) -> anyhow::Result<Repository>;

    /// Resolve a repository from its database id.
    async fn resolve_by_db_id(&self, ctx: &SecurityContext, id: i64)
    -> anyhow::Result<Repository>;
}

/// Computes diffs between two revisions of a repository.
#[async_trait]
pub trait ComparisonService: Send + Sync {
    async fn compare(
        &self,
        ctx: &SecurityContext,
        repository: &Repository,
        base: &str,
        head: &str,
    ) -> anyhow::Result<RepositoryComparison>;
}
