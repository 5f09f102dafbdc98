//! PHP emitter: appends an `addCollection` call before the return

use crate::entry::ImportEntry;
use crate::error::Result;
use crate::format::{ImportEmitter, RoutingFormat};

const PREAMBLE: &str = "<?php\n\
use Symfony\\Component\\Routing\\RouteCollection;\n\
$collection = new RouteCollection();\n";

const RETURN_STATEMENT: &str = "return $collection;";

/// Emitter for PHP routing scripts.
///
/// An empty file gets the `RouteCollection` preamble. Otherwise every
/// `return $collection;` is removed as plain text, the new statement is
/// appended, and a single return is put back as the last line.
#[derive(Debug, Clone, Default)]
pub struct PhpEmitter;

impl PhpEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl ImportEmitter for PhpEmitter {
    fn format(&self) -> RoutingFormat {
        RoutingFormat::Php
    }

    fn emit(&self, current: &str, entry: &ImportEntry) -> Result<String> {
        let mut code = if current.is_empty() {
            PREAMBLE.to_string()
        } else {
            current.replace(RETURN_STATEMENT, "")
        };

        code.push_str(&format!(
            "$collection->addCollection($loader->import(\"{}\"), '{}');\n",
            entry.resource_path("php"),
            entry.prefix()
        ));
        code.push_str(RETURN_STATEMENT);
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_php_emit_empty_has_preamble() {
        let out = PhpEmitter::new()
            .emit("", &ImportEntry::new("FooBundle"))
            .unwrap();
        assert_eq!(
            out,
            "<?php\n\
             use Symfony\\Component\\Routing\\RouteCollection;\n\
             $collection = new RouteCollection();\n\
             $collection->addCollection($loader->import(\"FooBundle/Resources/config/routing.php\"), '/');\n\
             return $collection;"
        );
    }

    #[test]
    fn test_php_emit_appends_before_return() {
        let emitter = PhpEmitter::new();
        let first = emitter.emit("", &ImportEntry::new("FooBundle")).unwrap();
        let second = emitter
            .emit(&first, &ImportEntry::new("FoobarBundle").with_prefix("/bar"))
            .unwrap();

        let foo = second.find("FooBundle/Resources").unwrap();
        let foobar = second.find("FoobarBundle/Resources").unwrap();
        assert!(foo < foobar);
        assert_eq!(second.matches(RETURN_STATEMENT).count(), 1);
        assert!(second.ends_with(RETURN_STATEMENT));
        assert!(second.contains(
            "$collection->addCollection($loader->import(\"FoobarBundle/Resources/config/routing.php\"), '/bar');"
        ));
    }

    #[test]
    fn test_php_emit_without_return() {
        let current = "<?php\n$collection = new RouteCollection();\n";
        let out = PhpEmitter::new()
            .emit(current, &ImportEntry::new("FooBundle"))
            .unwrap();
        assert!(out.starts_with(current));
        assert!(out.ends_with(RETURN_STATEMENT));
    }

    #[test]
    fn test_php_emit_uses_resource_name() {
        let out = PhpEmitter::new()
            .emit("", &ImportEntry::new("FooBundle").with_resource("admin"))
            .unwrap();
        assert!(out.contains("\"FooBundle/Resources/config/admin.php\""));
    }
}
