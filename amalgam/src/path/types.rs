//! The resolved-path key used for include deduplication.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::path::normalize::resolve_components;

/// A path after lexical resolution, used as the dedup key for includes.
///
/// Two `ResolvedPath`s compare equal exactly when their normalized components
/// are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    /// Resolve `raw` as written in an include directive of `including_file`.
    ///
    /// The base is the parent directory of `including_file`. An absolute `raw`
    /// path replaces the base entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use amalgam::path::ResolvedPath;
    /// use std::path::Path;
    ///
    /// let p = ResolvedPath::for_include(Path::new("a.h"), "b.h");
    /// assert_eq!(p.as_path(), Path::new("b.h"));
    /// ```
    #[must_use]
    pub fn for_include(including_file: &Path, raw: &str) -> Self {
        let base = including_file.parent().unwrap_or_else(|| Path::new(""));
        Self::new(&base.join(raw))
    }

    /// Resolve a path supplied directly by the caller (root or exclusion).
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self(resolve_components(path))
    }

    /// Returns the resolved path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consumes the key, returning the inner path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
