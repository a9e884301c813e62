use serde::Deserialize;

/// Module configuration, read from the module's `config` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangesetsConfig {
    /// Path segment changeset URLs are built under: `<repo>/-/<segment>/<number>`.
    #[serde(default = "default_url_segment")]
    pub url_segment: String,
}

impl Default for ChangesetsConfig {
    fn default() -> Self {
        Self {
            url_segment: default_url_segment(),
        }
    }
}

impl ChangesetsConfig {
    /// Parse the module's raw JSON config section.
    ///
    /// # Errors
    /// Returns an error if the value has unknown keys or mistyped fields.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

fn default_url_segment() -> String {
    "changesets".to_owned()
}
