//! Public models for the changesets module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the changesets module and its consumers.

use std::fmt;

use crate::gql_id::marshal_changeset_id;

/// Settings blob reported when a changeset has none stored.
pub const EMPTY_SETTINGS: &str = "{}";

/// Lifecycle status of a changeset. Opaque to the resolver layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangesetStatus {
    Open,
    Merged,
    Closed,
}

impl ChangesetStatus {
    /// Name used on the API surface.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Merged => "MERGED",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for ChangesetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored changeset record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changeset {
    pub id: i64,
    pub repository_id: i64,
    pub title: String,
    pub external_url: Option<String>,
    /// JSON-encoded settings, kept exactly as stored.
    pub settings: Option<String>,
    pub status: ChangesetStatus,
}

impl Changeset {
    /// Opaque external identifier.
    #[must_use]
    pub fn gql_id(&self) -> String {
        marshal_changeset_id(self.id)
    }

    /// Changeset number as shown to users.
    ///
    /// Numbers are currently the global database id, not a per-repository
    /// sequence.
    #[must_use]
    pub fn number(&self) -> String {
        self.id.to_string()
    }

    /// Stored settings verbatim, or `{}` when none are stored.
    #[must_use]
    pub fn settings_json(&self) -> &str {
        self.settings.as_deref().unwrap_or(EMPTY_SETTINGS)
    }
}

/// Handle to a repository as returned by the repository resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    /// Base URL path of the repository, e.g. `github.com/acme/repo`.
    pub url: String,
}

/// Base/head revision pair a comparison should diff.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub base: String,
    pub head: String,
}

/// Parsed view of a changeset's settings blob.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangesetSettings {
    pub delta: Option<Delta>,
}

/// A computed comparison between two revisions of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryComparison {
    pub repository_id: i64,
    pub base: String,
    pub head: String,
    /// Revision range expression, e.g. `main...feature`.
    pub range: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changeset(settings: Option<&str>) -> Changeset {
        Changeset {
            id: 42,
            repository_id: 1,
            title: "Bump deps".to_owned(),
            external_url: None,
            settings: settings.map(str::to_owned),
            status: ChangesetStatus::Open,
        }
    }

    #[test]
    fn settings_default_to_empty_object() {
        assert_eq!(changeset(None).settings_json(), "{}");
    }

    #[test]
    fn settings_are_returned_verbatim() {
        let raw = r#"{ "Delta" : {"Base":"a", "Head":"b"} }"#;
        assert_eq!(changeset(Some(raw)).settings_json(), raw);
    }

    #[test]
    fn number_is_decimal_id() {
        assert_eq!(changeset(None).number(), "42");
        assert_eq!(changeset(None).gql_id(), "Q2hhbmdlc2V0OjQy");
    }

    #[test]
    fn status_names() {
        assert_eq!(ChangesetStatus::Merged.to_string(), "MERGED");
    }
}
