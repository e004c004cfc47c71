//! UIBuddy configuration
//!
//! Settings shared by every build: the namespace used for the synthetic markup root,
//! how `url(...)` references are normalised before they reach the resource resolver,
//! and which diagnostics categories are traced. Loaded from `uibuddy.toml`, with
//! environment variables taking precedence.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for UIBuddy
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct UiBuddyConfig {
    /// Markup parsing settings
    pub markup: MarkupConfig,
    /// Resource path settings
    pub resources: ResourceConfig,
    /// Comma separated diagnostics categories (`markup`, `uss`, `attributes`, `all`)
    pub diagnostics: Option<String>,
}

/// Markup configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkupConfig {
    /// Prefix bound on the synthetic root (`ui` in `<ui:Button/>`)
    pub namespace_prefix: String,
    /// Namespace URI bound to the prefix
    pub namespace_uri: String,
}

/// Resource path configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResourceConfig {
    /// Prefixes removed, in order, from `url(...)` paths
    pub strip_prefixes: Vec<String>,
    /// Drop the file extension from `url(...)` paths
    pub strip_extension: bool,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: "ui".to_string(),
            namespace_uri: "UnityEngine.UIElements".to_string(),
        }
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            strip_prefixes: vec!["project://database/".to_string(), "Assets/".to_string()],
            strip_extension: true,
        }
    }
}

impl MarkupConfig {
    /// Opening tag of the synthetic document root.
    pub fn root_open(&self) -> String {
        format!(
            "<{prefix}:UXML xmlns:{prefix}=\"{uri}\">",
            prefix = self.namespace_prefix,
            uri = self.namespace_uri
        )
    }

    /// Closing tag of the synthetic document root.
    pub fn root_close(&self) -> String {
        format!("</{}:UXML>", self.namespace_prefix)
    }
}

impl UiBuddyConfig {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(UiBuddyConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from `uibuddy.toml` in the current directory,
    /// or return the defaults if the file does not exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("uibuddy.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(prefix) = std::env::var("UIBUDDY_UI_PREFIX") {
            if !prefix.trim().is_empty() {
                self.markup.namespace_prefix = prefix.trim().to_string();
            }
        }
        if let Ok(uri) = std::env::var("UIBUDDY_UI_NAMESPACE") {
            self.markup.namespace_uri = uri;
        }
        if let Ok(val) = std::env::var("UIBUDDY_STRIP_EXTENSION") {
            self.resources.strip_extension = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(diagnostics) = std::env::var("UIBUDDY_DIAGNOSTICS") {
            self.diagnostics = Some(diagnostics);
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
