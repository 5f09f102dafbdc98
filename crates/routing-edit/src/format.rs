//! Routing file formats and the emitter trait

use crate::entry::ImportEntry;
use crate::error::Result;

/// Routing file formats the manipulator knows about.
///
/// The format is never detected from the file; callers pass the one the
/// file is already written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingFormat {
    /// Key/indentation YAML routing file
    Yaml,
    /// XML `<routes>` document
    Xml,
    /// PHP script building a `RouteCollection`
    Php,
    /// Annotation routing or any unrecognized format; never written
    Annotation,
}

impl RoutingFormat {
    /// Map a format name to a format.
    ///
    /// Unknown names fall back to [`RoutingFormat::Annotation`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "yml" | "yaml" => Self::Yaml,
            "xml" => Self::Xml,
            "php" => Self::Php,
            _ => Self::Annotation,
        }
    }

    /// Canonical name of the format
    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "yml",
            Self::Xml => "xml",
            Self::Php => "php",
            Self::Annotation => "annotation",
        }
    }

    /// File extension of imported resources, if the format is editable
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Yaml => Some("yml"),
            Self::Xml => Some("xml"),
            Self::Php => Some("php"),
            Self::Annotation => None,
        }
    }
}

impl std::fmt::Display for RoutingFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for format-specific import emitters.
///
/// An emitter takes the current file content and returns the complete new
/// content with one import entry added. It never touches the filesystem.
pub trait ImportEmitter {
    /// Format this emitter writes
    fn format(&self) -> RoutingFormat;

    /// Produce the new file content with `entry` added to `current`.
    fn emit(&self, current: &str, entry: &ImportEntry) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known() {
        assert_eq!(RoutingFormat::from_name("yml"), RoutingFormat::Yaml);
        assert_eq!(RoutingFormat::from_name("YAML"), RoutingFormat::Yaml);
        assert_eq!(RoutingFormat::from_name("xml"), RoutingFormat::Xml);
        assert_eq!(RoutingFormat::from_name(" php "), RoutingFormat::Php);
    }

    #[test]
    fn test_from_name_unknown_is_annotation() {
        assert_eq!(RoutingFormat::from_name("annotation"), RoutingFormat::Annotation);
        assert_eq!(RoutingFormat::from_name("ini"), RoutingFormat::Annotation);
        assert_eq!(RoutingFormat::from_name(""), RoutingFormat::Annotation);
    }

    #[test]
    fn test_extension() {
        assert_eq!(RoutingFormat::Yaml.extension(), Some("yml"));
        assert_eq!(RoutingFormat::Annotation.extension(), None);
        assert_eq!(RoutingFormat::Php.to_string(), "php");
    }
}
