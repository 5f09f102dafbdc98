//! Shared test stores

use std::cell::{Cell, RefCell};
use std::io::ErrorKind;

use routing_edit::{Result, RouteStore};
use routing_fs::NormalizedPath;

/// In-memory single-file store that counts operations.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub content: RefCell<Option<String>>,
    pub fail_writes: bool,
    pub writes: Cell<usize>,
    pub dirs_created: Cell<usize>,
}

impl MemoryStore {
    pub fn with_content(content: &str) -> Self {
        Self {
            content: RefCell::new(Some(content.to_string())),
            ..Self::default()
        }
    }

    pub fn failing(content: Option<&str>) -> Self {
        Self {
            content: RefCell::new(content.map(str::to_string)),
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl RouteStore for MemoryStore {
    fn read(&self, _path: &NormalizedPath) -> Result<Option<String>> {
        Ok(self.content.borrow().clone())
    }

    fn ensure_parent(&self, _path: &NormalizedPath) -> Result<()> {
        self.dirs_created.set(self.dirs_created.get() + 1);
        Ok(())
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> routing_fs::Result<()> {
        if self.fail_writes {
            return Err(routing_fs::Error::io(
                path.to_native(),
                std::io::Error::from(ErrorKind::PermissionDenied),
            ));
        }
        self.writes.set(self.writes.get() + 1);
        *self.content.borrow_mut() = Some(content.to_string());
        Ok(())
    }
}
