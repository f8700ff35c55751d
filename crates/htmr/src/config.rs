//! Serializable configuration (htmr.toml).
//!
//! Covers the options that can be written down as data. Overrides are code and
//! are added to the resulting [`PartialOptions`] by the caller.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::HtmrError;
use crate::options::{PartialOptions, PreserveAttribute};

/// Configuration file structure.
///
/// ```toml
/// preserve_attributes = ["class", "/^ng-/"]
/// dangerously_set_children = ["style", "code-sample"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HtmrConfig {
    /// Attribute names, or `/regex/` patterns, passed through untranslated
    #[serde(default)]
    pub preserve_attributes: Option<Vec<String>>,

    /// Tags whose content is injected raw (defaults to `["style"]`)
    #[serde(default)]
    pub dangerously_set_children: Option<Vec<String>>,
}

impl HtmrConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, HtmrError> {
        toml::from_str(content).map_err(|e| HtmrError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, HtmrError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build partial options, compiling any attribute patterns.
    pub fn into_options<E>(self) -> Result<PartialOptions<E>, HtmrError> {
        let preserve_attributes = self
            .preserve_attributes
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| PreserveAttribute::parse(entry))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(PartialOptions {
            transform: None,
            preserve_attributes,
            dangerously_set_children: self
                .dangerously_set_children
                .map(|tags| tags.into_iter().collect()),
        })
    }
}
