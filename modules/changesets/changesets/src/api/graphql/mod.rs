//! GraphQL-facing resolvers.
//!
//! Schema binding and transport live in the API gateway; this layer only
//! exposes the query entry points and the per-field resolvers they return.

pub mod changeset;
pub mod query;

pub use changeset::ChangesetResolver;
pub use query::ChangesetQuery;
