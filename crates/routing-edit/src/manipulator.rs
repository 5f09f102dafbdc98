//! Adds bundle route imports to a routing file

use routing_fs::NormalizedPath;

use crate::config::ManipulatorConfig;
use crate::emitters::{PhpEmitter, XmlEmitter, YamlEmitter};
use crate::entry::ImportEntry;
use crate::error::{Error, Result};
use crate::format::{ImportEmitter, RoutingFormat};
use crate::store::{FsStore, RouteStore};

/// Result of a successful [`RoutingManipulator::add_resource`] call.
#[derive(Debug)]
pub enum AddOutcome {
    /// The file was rewritten with the new import
    Written,
    /// The format is not editable (annotations); nothing was written
    Skipped,
    /// New content was computed but could not be written. The original
    /// file is unchanged.
    WriteFailed { source: routing_fs::Error },
}

impl AddOutcome {
    /// `true` unless the final write failed
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::WriteFailed { .. })
    }
}

/// Edits one routing file.
///
/// Each call reads the whole file, computes the new content in memory and
/// replaces the file with a single write, so a failure before the write
/// leaves the file as it was.
#[derive(Debug, Clone)]
pub struct RoutingManipulator<S = FsStore> {
    path: NormalizedPath,
    store: S,
    config: ManipulatorConfig,
}

impl RoutingManipulator<FsStore> {
    /// Manipulator for the routing file at `path` on the local filesystem.
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self::with_store(path, FsStore)
    }
}

impl<S: RouteStore> RoutingManipulator<S> {
    /// Manipulator for `path` using a custom store.
    pub fn with_store(path: impl Into<NormalizedPath>, store: S) -> Self {
        Self {
            path: path.into(),
            store,
            config: ManipulatorConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ManipulatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn config(&self) -> &ManipulatorConfig {
        &self.config
    }

    /// Import `bundle`'s `<resource>.<ext>` routes mounted at `prefix`.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateImport`] if the file already mentions `bundle`
    ///   anywhere, whatever the format
    /// - [`Error::MalformedMarkup`] if an XML file cannot be parsed
    /// - [`Error::Fs`] if the file cannot be read or its directory created
    ///
    /// A failed final write is not an error; it comes back as
    /// [`AddOutcome::WriteFailed`].
    pub fn add_resource(
        &self,
        bundle: &str,
        format: RoutingFormat,
        prefix: &str,
        resource: &str,
    ) -> Result<AddOutcome> {
        let entry = ImportEntry::new(bundle)
            .with_prefix(prefix)
            .with_resource(resource);
        self.add_entry(&entry, format)
    }

    /// [`add_resource`](Self::add_resource) with the configured default
    /// prefix and resource name.
    pub fn add_bundle(&self, bundle: &str, format: RoutingFormat) -> Result<AddOutcome> {
        let entry = ImportEntry::new(bundle)
            .with_prefix(self.config.default_prefix.as_str())
            .with_resource(self.config.default_resource.as_str());
        self.add_entry(&entry, format)
    }

    /// Add a prepared entry to the file.
    pub fn add_entry(&self, entry: &ImportEntry, format: RoutingFormat) -> Result<AddOutcome> {
        let current = match self.store.read(&self.path)? {
            Some(content) => {
                // Plain substring match also catches hand-edited imports
                if content.contains(entry.bundle()) {
                    return Err(Error::DuplicateImport {
                        bundle: entry.bundle().to_string(),
                    });
                }
                content
            }
            None => {
                self.store.ensure_parent(&self.path)?;
                String::new()
            }
        };

        let Some(emitter) = self.emitter(format) else {
            tracing::debug!(path = %self.path, %format, "Format is not editable, skipping");
            return Ok(AddOutcome::Skipped);
        };

        tracing::debug!(
            path = %self.path,
            format = %emitter.format(),
            bundle = entry.bundle(),
            prefix = entry.prefix(),
            "Adding routing import"
        );
        let code = emitter.emit(&current, entry)?;

        match self.store.write(&self.path, &code) {
            Ok(()) => Ok(AddOutcome::Written),
            Err(source) => {
                tracing::warn!(path = %self.path, error = %source, "Failed to write routing file");
                Ok(AddOutcome::WriteFailed { source })
            }
        }
    }

    fn emitter(&self, format: RoutingFormat) -> Option<Box<dyn ImportEmitter>> {
        match format {
            RoutingFormat::Yaml => Some(Box::new(YamlEmitter::new(self.config.bundle_suffix_len))),
            RoutingFormat::Xml => Some(Box::new(XmlEmitter::new(self.config.xml_indent))),
            RoutingFormat::Php => Some(Box::new(PhpEmitter::new())),
            RoutingFormat::Annotation => None,
        }
    }
}
