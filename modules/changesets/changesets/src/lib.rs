//! Changesets Module
//!
//! Resolves changesets for the API layer: lookup by opaque id or by
//! (repository, number), field projection, and on-demand derivation of a
//! repository comparison from the changeset's settings.
//!
//! ## Public API
//!
//! The public API is defined in the `changesets-sdk` crate and re-exported here.
//! Storage, repository resolution and diff computation are collaborators
//! supplied by the host through [`ChangesetsDeps`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use changesets_sdk::{
    Changeset, ChangesetStatus, ChangesetsClientV1, ChangesetsError, GraphQlId, Repository,
    RepositoryComparison, SecurityContext,
};

pub mod module;
pub use module::{ChangesetsDeps, ChangesetsModule};

pub mod local_client;

pub mod config;
pub use config::ChangesetsConfig;

pub use api::graphql::{ChangesetQuery, ChangesetResolver};
pub use domain::ports::{ComparisonService, RepositoryResolver};
pub use domain::repo::ChangesetsRepository;
pub use infra::storage::InMemoryChangesetsRepository;

// === INTERNAL MODULES ===
// Exposed for testing; use the re-exports above.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
