use std::sync::Arc;

use changesets_sdk::security::{CHANGESETS_RESOURCE, READ_ACTION};
use changesets_sdk::{
    Changeset, PolicyEngineRef, Repository, RepositoryComparison, SecurityContext,
    unmarshal_changeset_id,
};
use tracing::instrument;

use super::error::DomainError;
use super::ports::{ComparisonService, RepositoryResolver};
use super::repo::ChangesetsRepository;
use super::settings::parse_settings;
use crate::config::ChangesetsConfig;

pub struct ServiceConfig {
    pub url_segment: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from(&ChangesetsConfig::default())
    }
}

impl From<&ChangesetsConfig> for ServiceConfig {
    fn from(cfg: &ChangesetsConfig) -> Self {
        Self {
            url_segment: cfg.url_segment.clone(),
        }
    }
}

/// Changeset lookup, repository consistency and comparison derivation.
///
/// Stateless apart from its collaborators: every call is an independent
/// sequence of lookups.
pub struct Service {
    repo: Arc<dyn ChangesetsRepository>,
    repositories: Arc<dyn RepositoryResolver>,
    comparisons: Arc<dyn ComparisonService>,
    policy_engine: PolicyEngineRef,
    config: ServiceConfig,
}

impl Service {
    pub fn new(
        repo: Arc<dyn ChangesetsRepository>,
        repositories: Arc<dyn RepositoryResolver>,
        comparisons: Arc<dyn ComparisonService>,
        policy_engine: PolicyEngineRef,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            repositories,
            comparisons,
            policy_engine,
            config,
        }
    }

    /// Look up a changeset by its opaque external id.
    #[instrument(skip(self, ctx))]
    pub async fn get_changeset_by_id(
        &self,
        ctx: &SecurityContext,
        id: &str,
    ) -> Result<Changeset, DomainError> {
        self.authorize(ctx)?;
        let db_id = unmarshal_changeset_id(id)?;
        self.find(ctx, db_id).await
    }

    /// Look up a changeset by database id.
    #[instrument(skip(self, ctx))]
    pub async fn get_changeset(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<Changeset, DomainError> {
        self.authorize(ctx)?;
        self.find(ctx, id).await
    }

    /// Look up a changeset by number and check it lives in `repository_id`.
    ///
    /// Numbers are global, so fetching by number alone does not prove the
    /// changeset belongs to the repository it is addressed under.
    #[instrument(skip(self, ctx))]
    pub async fn get_changeset_in_repository(
        &self,
        ctx: &SecurityContext,
        repository_id: &str,
        number: &str,
    ) -> Result<Changeset, DomainError> {
        self.authorize(ctx)?;
        let db_id = number
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_number(number, e))?;

        let changeset = self.find(ctx, db_id).await?;

        let asserted = self
            .repositories
            .resolve_by_id(ctx, repository_id)
            .await
            .map_err(DomainError::Repository)?;

        if changeset.repository_id != asserted.id {
            tracing::warn!(
                changeset_id = changeset.id,
                changeset_repository_id = changeset.repository_id,
                asserted_repository_id = asserted.id,
                "changeset does not exist in repository"
            );
            return Err(DomainError::repository_mismatch(changeset.id, asserted.id));
        }

        Ok(changeset)
    }

    /// Resolve the repository that owns `changeset`.
    ///
    /// The record may come from the caller, so the policy is checked again.
    #[instrument(skip_all, fields(changeset_id = changeset.id))]
    pub async fn changeset_repository(
        &self,
        ctx: &SecurityContext,
        changeset: &Changeset,
    ) -> Result<Repository, DomainError> {
        self.authorize(ctx)?;
        self.repositories
            .resolve_by_db_id(ctx, changeset.repository_id)
            .await
            .map_err(DomainError::Repository)
    }

    /// `<repository url>/-/<segment>/<number>`.
    #[instrument(skip_all, fields(changeset_id = changeset.id))]
    pub async fn changeset_url(
        &self,
        ctx: &SecurityContext,
        changeset: &Changeset,
    ) -> Result<String, DomainError> {
        let repository = self.changeset_repository(ctx, changeset).await?;
        let number = changeset.number();
        let url = join_path(&[
            repository.url.as_str(),
            "-",
            self.config.url_segment.as_str(),
            number.as_str(),
        ]);
        tracing::debug!(%url, "built changeset url");
        Ok(url)
    }

    /// Compare the revisions named by the changeset's `Delta` setting.
    ///
    /// `Ok(None)` when the settings name no delta. The comparison service's
    /// result is returned as is.
    #[instrument(skip_all, fields(changeset_id = changeset.id))]
    pub async fn repository_comparison(
        &self,
        ctx: &SecurityContext,
        changeset: &Changeset,
    ) -> Result<Option<RepositoryComparison>, DomainError> {
        self.authorize(ctx)?;
        let settings = parse_settings(changeset.settings_json()).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse changeset settings");
            DomainError::InvalidSettings(e)
        })?;

        let Some(delta) = settings.delta else {
            tracing::debug!("changeset settings name no delta");
            return Ok(None);
        };

        let repository = self.changeset_repository(ctx, changeset).await?;
        let comparison = self
            .comparisons
            .compare(ctx, &repository, &delta.base, &delta.head)
            .await
            .map_err(DomainError::Comparison)?;
        Ok(Some(comparison))
    }

    async fn find(&self, ctx: &SecurityContext, id: i64) -> Result<Changeset, DomainError> {
        let changeset = self
            .repo
            .find_by_id(ctx, id)
            .await
            .map_err(DomainError::Storage)?
            .ok_or_else(|| DomainError::not_found(id))?;

        tracing::debug!(changeset_id = id, "resolved changeset");
        Ok(changeset)
    }

    fn authorize(&self, ctx: &SecurityContext) -> Result<(), DomainError> {
        if self
            .policy_engine
            .allows(ctx, CHANGESETS_RESOURCE, READ_ACTION)
        {
            Ok(())
        } else {
            Err(DomainError::AccessDenied {
                resource: CHANGESETS_RESOURCE,
                action: READ_ACTION,
            })
        }
    }
}

/// Join path segments the way `path.Join` does: empty and `.` segments are
/// dropped, `..` pops (or is kept when nothing is left to pop in a relative
/// path), a leading `/` on the first segment is kept.
fn join_path(segments: &[&str]) -> String {
    let rooted = segments.first().is_some_and(|s| s.starts_with('/'));
    let mut parts: Vec<&str> = Vec::new();
    for part in segments.iter().flat_map(|s| s.split('/')) {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|p| *p != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }
    if parts.is_empty() && !rooted {
        return if segments.iter().all(|s| s.is_empty()) {
            String::new()
        } else {
            ".".to_owned()
        };
    }
    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else {
        joined
    }
}
