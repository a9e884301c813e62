use async_trait::async_trait;
use changesets_sdk::{Changeset, SecurityContext};

/// Storage lookup for changeset records.
///
/// Records are owned by the storage layer; this module only reads them.
#[async_trait]
pub trait ChangesetsRepository: Send + Sync {
    /// Find a changeset by database id. `Ok(None)` means no such record.
    async fn find_by_id(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> anyhow::Result<Option<Changeset>>;
}
