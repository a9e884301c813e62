#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use async_trait::async_trait;
use changesets::{
    Changeset, ChangesetStatus, ChangesetsConfig, ChangesetsDeps, ChangesetsModule,
    ComparisonService, InMemoryChangesetsRepository, Repository, RepositoryComparison,
    RepositoryResolver, SecurityContext,
};
use changesets_sdk::{NoopPolicyEngine, PolicyEngineRef, unmarshal_repository_id};

/// Repository resolver over a fixed list.
pub struct StaticRepositories(pub Vec<Repository>);

#[async_trait]
impl RepositoryResolver for StaticRepositories {
    async fn resolve_by_id(&self, ctx: &SecurityContext, id: &str) -> anyhow::Result<Repository> {
        let db_id = unmarshal_repository_id(id)?;
        self.resolve_by_db_id(ctx, db_id).await
    }

    async fn resolve_by_db_id(
        &self,
        _ctx: &SecurityContext,
        id: i64,
    ) -> anyhow::Result<Repository> {
        self.0
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("repository not found: {id}"))
    }
}

/// Comparison service that echoes the requested range; `head == "missing"` fails.
pub struct EchoComparisons;

#[async_trait]
impl ComparisonService for EchoComparisons {
    async fn compare(
        &self,
        _ctx: &SecurityContext,
        repository: &Repository,
        base: &str,
        head: &str,
    ) -> anyhow::Result<RepositoryComparison> {
        if head == "missing" {
            anyhow::bail!("revision not found: {head}");
        }
        Ok(RepositoryComparison {
            repository_id: repository.id,
            base: base.to_owned(),
            head: head.to_owned(),
            range: format!("{base}...{head}"),
        })
    }
}

pub const ACME_REPO: i64 = 1;
pub const OTHER_REPO: i64 = 2;

pub fn repositories() -> Vec<Repository> {
    vec![
        Repository {
            id: ACME_REPO,
            name: "github.com/acme/repo".to_owned(),
            url: "github.com/acme/repo".to_owned(),
        },
        Repository {
            id: OTHER_REPO,
            name: "github.com/acme/other".to_owned(),
            url: "github.com/acme/other".to_owned(),
        },
    ]
}

pub fn changesets() -> Vec<Changeset> {
    vec![
        Changeset {
            id: 7,
            repository_id: ACME_REPO,
            title: "Fix flaky test".to_owned(),
            external_url: Some("https://github.com/acme/repo/pull/7".to_owned()),
            settings: None,
            status: ChangesetStatus::Open,
        },
        Changeset {
            id: 42,
            repository_id: ACME_REPO,
            title: "Upgrade toolchain".to_owned(),
            external_url: None,
            settings: Some(r#"{"Delta":{"Base":"main","Head":"upgrade"}}"#.to_owned()),
            status: ChangesetStatus::Merged,
        },
        Changeset {
            id: 43,
            repository_id: OTHER_REPO,
            title: "Broken settings".to_owned(),
            external_url: None,
            settings: Some("{\"Delta\":".to_owned()),
            status: ChangesetStatus::Closed,
        },
        Changeset {
            id: 44,
            repository_id: OTHER_REPO,
            title: "Points at a missing revision".to_owned(),
            external_url: None,
            settings: Some(r#"{"Delta":{"Base":"main","Head":"missing"}}"#.to_owned()),
            status: ChangesetStatus::Open,
        },
    ]
}

pub fn module_with(policy_engine: PolicyEngineRef) -> ChangesetsModule {
    let repo: InMemoryChangesetsRepository = changesets().into_iter().collect();
    ChangesetsModule::new(
        &ChangesetsConfig::default(),
        ChangesetsDeps {
            repo: Arc::new(repo),
            repositories: Arc::new(StaticRepositories(repositories())),
            comparisons: Arc::new(EchoComparisons),
            policy_engine,
        },
    )
}

pub fn module() -> ChangesetsModule {
    module_with(Arc::new(NoopPolicyEngine))
}
