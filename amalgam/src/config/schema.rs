//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::expander::{read_text, ExpandOptions};

/// Settings for one expansion run, every field optional.
///
/// # Examples
///
/// ```
/// use amalgam::config::Config;
/// use std::path::PathBuf;
///
/// let file = Config {
///     root: Some(PathBuf::from("inc/lib.h")),
///     exclude: vec![PathBuf::from("inc/platform.h")],
///     ..Default::default()
/// };
/// let flags = Config {
///     output: Some(PathBuf::from("lib.h")),
///     exclude: vec![PathBuf::from("inc/debug.h")],
///     ..Default::default()
/// };
///
/// let merged = file.merge(flags);
/// assert_eq!(merged.root, Some(PathBuf::from("inc/lib.h")));
/// assert_eq!(merged.exclude.len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root file to expand.
    pub root: Option<PathBuf>,

    /// Output file; standard output when absent.
    pub output: Option<PathBuf>,

    /// File whose contents replace the root's header block.
    pub header: Option<PathBuf>,

    /// Paths treated as already included.
    #[serde(default)]
    pub exclude: Vec<PathBuf>,
}

impl Config {
    /// Layer `overrides` on top of `self`.
    ///
    /// Scalar fields from `overrides` win when set; exclusions are appended.
    #[must_use]
    pub fn merge(mut self, overrides: Config) -> Config {
        if overrides.root.is_some() {
            self.root = overrides.root;
        }
        if overrides.output.is_some() {
            self.output = overrides.output;
        }
        if overrides.header.is_some() {
            self.header = overrides.header;
        }
        self.exclude.extend(overrides.exclude);
        self
    }

    /// Check that the configuration describes a runnable expansion.
    ///
    /// # Errors
    ///
    /// Returns a validation error if no root file is set.
    pub fn into_settings(self) -> Result<RunSettings> {
        let root = self.root.ok_or_else(|| Error::Validation {
            field: "root".to_string(),
            message: "no root file given".to_string(),
        })?;

        Ok(RunSettings {
            root,
            output: self.output,
            header: self.header,
            exclude: self.exclude,
        })
    }
}

/// A validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Root file to expand.
    pub root: PathBuf,
    /// Output file; standard output when absent.
    pub output: Option<PathBuf>,
    /// Replacement header file.
    pub header: Option<PathBuf>,
    /// Pre-excluded paths.
    pub exclude: Vec<PathBuf>,
}

impl RunSettings {
    /// Build expansion options, reading the replacement header if one is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the header file cannot be read.
    pub fn expand_options(&self) -> Result<ExpandOptions> {
        let header = self.header.as_deref().map(read_text).transpose()?;
        Ok(ExpandOptions::new()
            .with_header(header)
            .with_exclude(self.exclude.clone()))
    }
}
