//! Loading adapter configuration from JSON or TOML.
//!
//! An [`AdapterConfig`] describes the option list and an optional initial
//! selection. It can be parsed from a string or loaded from a file whose
//! extension picks the format.
//!
//! ```ignore
//! use horizon_select::{AdapterConfig, SelectionAdapter};
//!
//! let config = AdapterConfig::load("fruit.toml")?;
//! let adapter = SelectionAdapter::from_config(&config)?;
//! ```
//!
//! TOML layout:
//!
//! ```toml
//! selected_index = 1
//!
//! [[options]]
//! id = "12"
//! value = "Apples"
//!
//! [[options]]
//! id = "21"
//! val = "Pears"
//! ```

use std::fs;
use std::path::Path;

use horizon_select_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::adapter::SelectionAdapter;
use crate::error::{Error, Result};
use crate::option::OptionList;

/// Serializable description of a selection adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Initial committed index; `0` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_index: Option<i64>,
    /// The options, in display order.
    #[serde(default)]
    pub options: OptionList,
}

/// Configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON (`.json`).
    Json,
    /// TOML (`.toml`).
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl AdapterConfig {
    /// Create a config from options and an optional initial index.
    pub fn new(options: OptionList, selected_index: Option<i64>) -> Self {
        Self {
            selected_index,
            options,
        }
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::format("<json>", e))
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::format("<toml>", e))
    }

    /// Load from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| Error::format(path, e))?,
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::format(path, e))?,
        };

        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            options = config.options.len(),
            "loaded adapter config"
        );
        Ok(config)
    }

    /// Write as pretty-printed JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| Error::format(path, e))?;
        fs::write(path, json).map_err(|e| Error::io(path, e))
    }

    /// Write as TOML.
    pub fn save_toml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self).map_err(|e| Error::format(path, e))?;
        fs::write(path, text).map_err(|e| Error::io(path, e))
    }
}

impl SelectionAdapter {
    /// Build an initialized adapter from a config.
    ///
    /// Applies `selected_index` after initialization without bounds checking.
    pub fn from_config(config: &AdapterConfig) -> Result<Self> {
        let adapter = Self::new().with_options(config.options.clone())?;
        if let Some(index) = config.selected_index {
            adapter.set_selected_index(index);
        }
        Ok(adapter)
    }

    /// Snapshot the options and committed index as a config.
    pub fn to_config(&self) -> AdapterConfig {
        AdapterConfig::new(self.options().clone(), Some(self.selected_index()))
    }
}
