//! Changesets SDK
//!
//! This crate provides the public API for the changesets module:
//! - `ChangesetsClientV1` trait for inter-module communication
//! - Opaque external identifiers (`GraphQlId`)
//! - Model types (`Changeset`, `Repository`, `RepositoryComparison`, ...)
//! - Error type (`ChangesetsError`)
//! - Security context and policy engine seam
//!
//! Consumers obtain the client from the module:
//! ```ignore
//! let client = module.client();
//! let changeset = client.get_changeset_by_id(&ctx, "Q2hhbmdlc2V0Ojc=").await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod errors;
pub mod gql_id;
pub mod models;
pub mod security;

pub use client::ChangesetsClientV1;
pub use errors::ChangesetsError;
pub use gql_id::{
    EntityKind, GraphQlId, IdError, marshal_changeset_id, marshal_repository_id,
    unmarshal_changeset_id, unmarshal_repository_id,
};
pub use models::{
    Changeset, ChangesetSettings, ChangesetStatus, Delta, EMPTY_SETTINGS, Repository,
    RepositoryComparison,
};
pub use security::{
    DenyAllPolicyEngine, NoopPolicyEngine, PolicyEngine, PolicyEngineRef, SecurityContext,
};
