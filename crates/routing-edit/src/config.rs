//! Manipulator configuration

use routing_fs::{NormalizedPath, io};
use serde::{Deserialize, Serialize};

use crate::emitters::DEFAULT_INDENT;
use crate::entry::{BUNDLE_SUFFIX_LEN, DEFAULT_RESOURCE, ROOT_PREFIX};
use crate::error::{Error, Result};

/// Settings that shape generated routing entries.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManipulatorConfig {
    /// Characters stripped from the end of a bundle name to form route keys
    pub bundle_suffix_len: usize,
    /// Prefix used when the caller gives none
    pub default_prefix: String,
    /// Resource base name used when the caller gives none
    pub default_resource: String,
    /// Spaces per level when pretty-printing XML
    pub xml_indent: usize,
}

impl Default for ManipulatorConfig {
    fn default() -> Self {
        Self {
            bundle_suffix_len: BUNDLE_SUFFIX_LEN,
            default_prefix: ROOT_PREFIX.to_string(),
            default_resource: DEFAULT_RESOURCE.to_string(),
            xml_indent: DEFAULT_INDENT,
        }
    }
}

impl ManipulatorConfig {
    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = io::read_text(path)?;
        let extension = path.extension().unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                message: e.to_string(),
            }),
            // An empty YAML document means "all defaults"
            "yaml" | "yml" if content.trim().is_empty() => Ok(Self::default()),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedConfigFormat {
                extension: extension.to_string(),
            }),
        }
    }
}
