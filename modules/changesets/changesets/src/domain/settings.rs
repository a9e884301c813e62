//! Parsing of the free-form settings blob attached to a changeset.
//!
//! Settings are parsed on demand only, so a malformed blob fails the fields
//! that need it and nothing else.

use std::fmt;

use changesets_sdk::{ChangesetSettings, Delta};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

// Keys are matched ASCII case-insensitively and read in document order, so a
// later duplicate overrides an earlier one. A `null` delta clears it; a `null`
// revision leaves the previous value in place.
struct SettingsWire {
    delta: Option<Delta>,
}

struct DeltaWire {
    base: Option<String>,
    head: Option<String>,
}

impl<'de> Deserialize<'de> for SettingsWire {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SettingsVisitor;

        impl<'de> Visitor<'de> for SettingsVisitor {
            type Value = SettingsWire;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a settings object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut delta: Option<Delta> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if !key.eq_ignore_ascii_case("delta") {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    }
                    match map.next_value::<Option<DeltaWire>>()? {
                        None => delta = None,
                        Some(wire) => {
                            let merged = delta.get_or_insert_with(Delta::default);
                            if let Some(base) = wire.base {
                                merged.base = base;
                            }
                            if let Some(head) = wire.head {
                                merged.head = head;
                            }
                        }
                    }
                }
                Ok(SettingsWire { delta })
            }
        }

        deserializer.deserialize_map(SettingsVisitor)
    }
}

impl<'de> Deserialize<'de> for DeltaWire {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DeltaVisitor;

        impl<'de> Visitor<'de> for DeltaVisitor {
            type Value = DeltaWire;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a delta object with Base and Head revisions")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut wire = DeltaWire {
                    base: None,
                    head: None,
                };
                while let Some(key) = map.next_key::<String>()? {
                    let slot = if key.eq_ignore_ascii_case("base") {
                        &mut wire.base
                    } else if key.eq_ignore_ascii_case("head") {
                        &mut wire.head
                    } else {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    };
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *slot = Some(value);
                    }
                }
                Ok(wire)
            }
        }

        deserializer.deserialize_map(DeltaVisitor)
    }
}

/// Parse a settings blob. The JSON literal `null` reads as empty settings.
///
/// # Errors
/// Returns the JSON error when the blob is not a settings object.
pub fn parse_settings(raw: &str) -> Result<ChangesetSettings, serde_json::Error> {
    let wire: Option<SettingsWire> = serde_json::from_str(raw)?;
    Ok(ChangesetSettings {
        delta: wire.and_then(|w| w.delta),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_has_no_delta() {
        assert_eq!(parse_settings("{}").unwrap(), ChangesetSettings::default());
    }

    #[test]
    fn null_reads_as_empty() {
        assert_eq!(parse_settings("null").unwrap(), ChangesetSettings::default());
    }

    #[test]
    fn reads_delta() {
        let settings =
            parse_settings(r#"{"Delta":{"Base":"main","Head":"feature"},"Other":1}"#).unwrap();
        assert_eq!(
            settings.delta,
            Some(Delta {
                base: "main".to_owned(),
                head: "feature".to_owned(),
            })
        );
    }

    #[test]
    fn accepts_lowercase_names_and_missing_revisions() {
        let settings = parse_settings(r#"{"delta":{"head":"HEAD"}}"#).unwrap();
        assert_eq!(
            settings.delta,
            Some(Delta {
                base: String::new(),
                head: "HEAD".to_owned(),
            })
        );
    }

    #[test]
    fn explicit_null_delta_is_absent() {
        assert_eq!(parse_settings(r#"{"Delta":null}"#).unwrap().delta, None);
    }

    #[test]
    fn matches_keys_case_insensitively() {
        let settings = parse_settings(r#"{"DELTA":{"BASE":"main","hEaD":"x"}}"#).unwrap();
        assert_eq!(
            settings.delta,
            Some(Delta {
                base: "main".to_owned(),
                head: "x".to_owned(),
            })
        );
    }

    #[test]
    fn null_revisions_read_as_empty() {
        let settings = parse_settings(r#"{"Delta":{"Base":null,"Head":"x"}}"#).unwrap();
        assert_eq!(
            settings.delta,
            Some(Delta {
                base: String::new(),
                head: "x".to_owned(),
            })
        );
    }

    #[test]
    fn later_duplicate_keys_win() {
        let settings = parse_settings(
            r#"{"Delta":{"Base":"a","Head":"b","base":"c"},"delta":{"Head":"d"}}"#,
        )
        .unwrap();
        assert_eq!(
            settings.delta,
            Some(Delta {
                base: "c".to_owned(),
                head: "d".to_owned(),
            })
        );

        let cleared = parse_settings(r#"{"Delta":{"Base":"a"},"delta":null}"#).unwrap();
        assert_eq!(cleared.delta, None);
    }

    #[test]
    fn rejects_malformed_blobs() {
        assert!(parse_settings("[]").is_err());
        assert!(parse_settings(r#"{"Delta":{"Base":1}}"#).is_err());
        assert!(parse_settings("{").is_err());
        assert!(parse_settings("42").is_err());
        assert!(parse_settings(r#"{"Delta":"main...feature"}"#).is_err());
    }
}
