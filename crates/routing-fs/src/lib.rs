//! Filesystem capability layer for the routing manipulator
//!
//! Provides normalized paths and the read / create-directory / atomic-write
//! primitives the routing editor requests.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
