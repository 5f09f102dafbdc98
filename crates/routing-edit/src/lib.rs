//! Format-aware editing of routing configuration files
//!
//! Inserts a single "import this bundle's routes" entry into a YAML, XML
//! or PHP routing file, refusing bundles that are already referenced.

pub mod config;
pub mod emitters;
pub mod entry;
pub mod error;
pub mod format;
pub mod manipulator;
pub mod store;

pub use config::ManipulatorConfig;
pub use emitters::{PhpEmitter, XmlEmitter, YamlEmitter};
pub use entry::ImportEntry;
pub use error::{Error, Result};
pub use format::{ImportEmitter, RoutingFormat};
pub use manipulator::{AddOutcome, RoutingManipulator};
pub use store::{FsStore, RouteStore};
