//! Opaque external identifiers.
//!
//! Every entity exposed over the API is addressed by a token that carries the
//! entity kind next to its numeric database id. The wire format is the relay
//! one: URL-safe, padded base64 of `"<TypeName>:<id>"`, so `Changeset` 7 is
//! `Q2hhbmdlc2V0Ojc=`.
//!
//! The kind is part of the value, so a `Repository` token handed to a
//! changeset lookup is rejected instead of being read as a changeset id.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Kinds of entities that can be addressed by a [`GraphQlId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Changeset,
    Repository,
}

impl EntityKind {
    /// Type name embedded in the token.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Changeset => "Changeset",
            Self::Repository => "Repository",
        }
    }

    fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Changeset" => Some(Self::Changeset),
            "Repository" => Some(Self::Repository),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Reasons a token fails to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("invalid id: invalid base64 encoding")]
    InvalidBase64,

    #[error("invalid id: payload is not UTF-8")]
    InvalidUtf8,

    #[error("invalid id: missing type separator")]
    MissingSeparator,

    #[error("invalid id: unknown type '{0}'")]
    UnknownKind(String),

    #[error("invalid id: '{0}' is not an integer")]
    InvalidNumber(String),

    #[error("invalid id: expected {expected} id, got {actual} id")]
    KindMismatch {
        expected: EntityKind,
        actual: EntityKind,
    },
}

/// A decoded external identifier: an entity kind plus its numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphQlId {
    pub kind: EntityKind,
    pub id: i64,
}

impl GraphQlId {
    #[must_use]
    pub const fn new(kind: EntityKind, id: i64) -> Self {
        Self { kind, id }
    }

    #[must_use]
    pub const fn changeset(id: i64) -> Self {
        Self::new(EntityKind::Changeset, id)
    }

    #[must_use]
    pub const fn repository(id: i64) -> Self {
        Self::new(EntityKind::Repository, id)
    }

    /// Encode to the opaque token form.
    #[must_use]
    pub fn encode(&self) -> String {
        base64_url::encode(format!("{}:{}", self.kind, self.id).as_bytes())
    }

    /// Decode a token of any known kind.
    ///
    /// # Errors
    /// Returns an [`IdError`] describing the first malformed part of the token.
    pub fn parse(token: &str) -> Result<Self, IdError> {
        let bytes = base64_url::decode(token).map_err(|_| IdError::InvalidBase64)?;
        let payload = String::from_utf8(bytes).map_err(|_| IdError::InvalidUtf8)?;
        let (type_name, raw_id) = payload
            .split_once(':')
            .ok_or(IdError::MissingSeparator)?;
        let kind = EntityKind::from_type_name(type_name)
            .ok_or_else(|| IdError::UnknownKind(type_name.to_owned()))?;
        let id = raw_id
            .parse::<i64>()
            .map_err(|_| IdError::InvalidNumber(raw_id.to_owned()))?;
        Ok(Self { kind, id })
    }

    /// Decode a token and require it to be of `expected` kind.
    ///
    /// # Errors
    /// Returns [`IdError::KindMismatch`] when the token names another kind,
    /// or any error [`GraphQlId::parse`] returns.
    pub fn parse_as(expected: EntityKind, token: &str) -> Result<i64, IdError> {
        let parsed = Self::parse(token)?;
        if parsed.kind != expected {
            return Err(IdError::KindMismatch {
                expected,
                actual: parsed.kind,
            });
        }
        Ok(parsed.id)
    }
}

impl fmt::Display for GraphQlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for GraphQlId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Encode a changeset database id as an external token.
#[must_use]
pub fn marshal_changeset_id(id: i64) -> String {
    GraphQlId::changeset(id).encode()
}

/// Decode an external token that must name a changeset.
///
/// # Errors
/// Returns an [`IdError`] if the token is malformed or names another kind.
pub fn unmarshal_changeset_id(token: &str) -> Result<i64, IdError> {
    GraphQlId::parse_as(EntityKind::Changeset, token)
}

/// Encode a repository database id as an external token.
#[must_use]
pub fn marshal_repository_id(id: i64) -> String {
    GraphQlId::repository(id).encode()
}

/// Decode an external token that must name a repository.
///
/// # Errors
/// Returns an [`IdError`] if the token is malformed or names another kind.
pub fn unmarshal_repository_id(token: &str) -> Result<i64, IdError> {
    GraphQlId::parse_as(EntityKind::Repository, token)
}

// base64url helpers (padded, relay-compatible)
mod base64_url {
    use base64::Engine;

    pub fn encode(bytes: &[u8]) -> String {
        base64::engine::general_purpose::URL_SAFE.encode(bytes)
    }

    pub fn decode(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::URL_SAFE.decode(s)
    }
}
