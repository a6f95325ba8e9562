//! Run configuration.
//!
//! A run can be described by an `amalgam.yaml` file instead of (or in
//! addition to) command-line flags:
//!
//! ```yaml
//! root: include/lib/lib.hpp
//! output: single/lib.hpp
//! header: tools/header.txt
//! exclude:
//!   - include/lib/internal/platform.hpp
//! ```
//!
//! Paths in a file are relative to the file's directory. Explicit values
//! override file values, and exclusions from both are combined.

mod loader;
mod schema;

pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use schema::{Config, RunSettings};
