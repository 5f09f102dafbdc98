//! Format-specific import emitters

mod php;
mod xml;
mod yaml;

pub use self::php::PhpEmitter;
pub use self::xml::{DEFAULT_INDENT, XmlEmitter};
pub use self::yaml::YamlEmitter;
