use std::sync::Arc;

use changesets_sdk::{ChangesetsClientV1, PolicyEngineRef};

use crate::api::graphql::ChangesetQuery;
use crate::config::ChangesetsConfig;
use crate::domain::ports::{ComparisonService, RepositoryResolver};
use crate::domain::repo::ChangesetsRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::local_client::ChangesetsLocalClient;

/// Collaborators the module is wired with.
///
/// The policy engine is required: there is no implicit allow-all default.
pub struct ChangesetsDeps {
    pub repo: Arc<dyn ChangesetsRepository>,
    pub repositories: Arc<dyn RepositoryResolver>,
    pub comparisons: Arc<dyn ComparisonService>,
    pub policy_engine: PolicyEngineRef,
}

/// The changesets module: one service shared by the SDK client and the
/// GraphQL query root.
#[derive(Clone)]
pub struct ChangesetsModule {
    service: Arc<Service>,
}

impl ChangesetsModule {
    #[must_use]
    pub fn new(config: &ChangesetsConfig, deps: ChangesetsDeps) -> Self {
        let ChangesetsDeps {
            repo,
            repositories,
            comparisons,
            policy_engine,
        } = deps;
        let service = Service::new(
            repo,
            repositories,
            comparisons,
            policy_engine,
            ServiceConfig::from(config),
        );
        tracing::info!(url_segment = %config.url_segment, "changesets module initialized");
        Self {
            service: Arc::new(service),
        }
    }

    /// Client for inter-module consumption.
    #[must_use]
    pub fn client(&self) -> Arc<dyn ChangesetsClientV1> {
        Arc::new(ChangesetsLocalClient::new(Arc::clone(&self.service)))
    }

    /// Query root for the GraphQL layer.
    #[must_use]
    pub fn query(&self) -> ChangesetQuery {
        ChangesetQuery::new(Arc::clone(&self.service))
    }
}
