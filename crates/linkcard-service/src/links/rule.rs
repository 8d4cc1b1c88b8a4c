use serde::Serialize;

/// Settings shared by every rule for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkContext {
    /// Digits assumed for phone numbers entered without a leading `+`.
    /// `None` rejects such numbers instead.
    pub default_country_code: Option<String>,
}

impl Default for LinkContext {
    fn default() -> Self {
        Self {
            default_country_code: Some(linkcard_core::config::DEFAULT_COUNTRY_CODE.to_string()),
        }
    }
}

impl From<&linkcard_core::config::LinksConfig> for LinkContext {
    fn from(config: &linkcard_core::config::LinksConfig) -> Self {
        Self {
            default_country_code: config.country_code(),
        }
    }
}

/// A field value after normalization, ready to be turned into a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: String,
    /// Country code that was prefixed because the input had none.
    pub assumed_country_code: Option<String>,
}

impl Normalized {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            assumed_country_code: None,
        }
    }
}

/// One row of the link table.
///
/// `validate` sees the trimmed raw value. `normalize` returns `None` when the
/// value cannot be used, and `build` may return an empty string to the same effect.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Form field name, e.g. `"twitter"`.
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub validate: fn(&str) -> bool,
    pub normalize: fn(&str, &LinkContext) -> Option<Normalized>,
    pub build: fn(&str) -> String,
}

impl FieldRule {
    /// Runs the rule over a raw value. Blank values produce nothing.
    #[must_use]
    pub fn apply(&self, raw: &str, ctx: &LinkContext) -> Option<OutputLink> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !(self.validate)(trimmed) {
            return None;
        }

        let normalized = (self.normalize)(trimmed, ctx)?;
        if normalized.value.is_empty() {
            return None;
        }

        let uri = (self.build)(&normalized.value);
        if uri.is_empty() {
            return None;
        }

        Some(OutputLink {
            key: self.key,
            label: self.label,
            icon: self.icon,
            uri,
            assumed_country_code: normalized.assumed_country_code,
        })
    }
}

/// A generated link, as displayed next to its copy button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLink {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    #[serde(rename = "link")]
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assumed_country_code: Option<String>,
}
