use async_trait::async_trait;
use changesets_sdk::{Changeset, SecurityContext};
use dashmap::DashMap;

use crate::domain::repo::ChangesetsRepository;

/// In-process changeset storage keyed by database id.
#[derive(Debug, Default)]
pub struct InMemoryChangesetsRepository {
    rows: DashMap<i64, Changeset>,
}

impl InMemoryChangesetsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record, returning the previous one.
    pub fn upsert(&self, changeset: Changeset) -> Option<Changeset> {
        self.rows.insert(changeset.id, changeset)
    }

    pub fn remove(&self, id: i64) -> Option<Changeset> {
        self.rows.remove(&id).map(|(_, changeset)| changeset)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Changeset> for InMemoryChangesetsRepository {
    fn from_iter<I: IntoIterator<Item = Changeset>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

#[async_trait]
impl ChangesetsRepository for InMemoryChangesetsRepository {
    async fn find_by_id(
        &self,
        _ctx: &SecurityContext,
        id: i64,
    ) -> anyhow::Result<Option<Changeset>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }
}
