//! The import entry added to a routing file

use heck::ToSnakeCase;

/// Prefix used when routes are mounted at the root
pub const ROOT_PREFIX: &str = "/";

/// Resource base name used when none is given
pub const DEFAULT_RESOURCE: &str = "routing";

/// Length of the `Bundle` suffix stripped from bundle names
pub const BUNDLE_SUFFIX_LEN: usize = 6;

/// A single "import this bundle's routes" declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    bundle: String,
    prefix: String,
    resource: String,
}

impl ImportEntry {
    /// Entry for `bundle` mounted at `/` importing `routing.<ext>`.
    pub fn new(bundle: impl Into<String>) -> Self {
        Self {
            bundle: bundle.into(),
            prefix: ROOT_PREFIX.to_string(),
            resource: DEFAULT_RESOURCE.to_string(),
        }
    }

    /// Set the URL prefix the imported routes are mounted under.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the base name of the imported resource file.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Path of the imported resource relative to the bundle, e.g.
    /// `FooBundle/Resources/config/routing.xml`.
    pub fn resource_path(&self, extension: &str) -> String {
        format!(
            "{}/Resources/config/{}.{}",
            self.bundle, self.resource, extension
        )
    }

    /// Route key used by the YAML format.
    ///
    /// The bundle name loses its last `suffix_len` characters and is
    /// snake-cased; a non-root prefix appends its segments joined by `_`.
    /// `FooBundle` at `/bar` gives `foo_bar`.
    pub fn route_key(&self, suffix_len: usize) -> String {
        let keep = self.bundle.chars().count().saturating_sub(suffix_len);
        let base: String = self.bundle.chars().take(keep).collect();
        let mut key = base.to_snake_case();

        if self.prefix != ROOT_PREFIX {
            let tail: String = self.prefix.chars().skip(1).collect();
            key.push('_');
            key.push_str(&tail.replace('/', "_"));
        }
        key
    }
}
