#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # amalgam
//!
//! A library for flattening a tree of `#include`d headers into one file.
//!
//! Local includes (`#include "x.h"`) are replaced by the included file's
//! contents, recursively, each file at most once. System includes
//! (`#include <x.h>`) are written through unchanged. Nothing else about the
//! source language is interpreted: no macros, no conditionals.
//!
//! ## Core Types
//!
//! - [`Expander`], [`expand`] and [`ExpandOptions`]: the expansion itself
//! - [`IncludeDirective`] and [`QuoteStyle`]: parsed include lines
//! - [`ResolvedPath`] and [`SeenSet`]: include dedup keys and their set
//! - [`Config`]: run configuration from YAML files and flags
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use amalgam::{expand, ExpandOptions};
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("a.h"), "#pragma once\n#include \"b.h\"\nint a;\n").unwrap();
//! fs::write(dir.path().join("b.h"), "// b\n#define B\n").unwrap();
//!
//! let mut out = Vec::new();
//! expand(&dir.path().join("a.h"), &mut out, &ExpandOptions::new()).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\n#pragma once\n\n#define B\nint a;\n"
//! );
//! ```

pub mod config;
pub mod directive;
pub mod error;
pub mod expander;
pub mod logging;
pub mod path;
pub mod seen;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader, RunSettings};
pub use directive::{parse_include, IncludeDirective, QuoteStyle};
pub use error::{Error, Result};
pub use expander::{expand, expand_to_string, ExpandOptions, Expander, ExpansionSummary};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::ResolvedPath;
pub use seen::SeenSet;
