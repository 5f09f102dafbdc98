//! YAML emitter: prepends a keyed import block

use crate::entry::{BUNDLE_SUFFIX_LEN, ImportEntry};
use crate::error::Result;
use crate::format::{ImportEmitter, RoutingFormat};

/// Emitter for YAML routing files.
///
/// New blocks go above everything already in the file, so the most recent
/// import is always listed first. Existing content is kept byte for byte.
#[derive(Debug, Clone)]
pub struct YamlEmitter {
    suffix_len: usize,
}

impl YamlEmitter {
    pub fn new(suffix_len: usize) -> Self {
        Self { suffix_len }
    }
}

impl Default for YamlEmitter {
    fn default() -> Self {
        Self::new(BUNDLE_SUFFIX_LEN)
    }
}

impl ImportEmitter for YamlEmitter {
    fn format(&self) -> RoutingFormat {
        RoutingFormat::Yaml
    }

    fn emit(&self, current: &str, entry: &ImportEntry) -> Result<String> {
        let mut code = format!("{}:\n", entry.route_key(self.suffix_len));
        code.push_str(&format!(
            "    resource: \"@{}\"\n",
            entry.resource_path("yml")
        ));
        code.push_str(&format!("    prefix:   {}\n", entry.prefix()));
        code.push('\n');
        code.push_str(current);
        Ok(code)
    }
}
