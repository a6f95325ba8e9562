//! The set of include targets already handled in a run.

use std::collections::HashSet;

use crate::path::ResolvedPath;

/// Resolved paths that have been inlined, passed through, or pre-excluded.
///
/// The set only grows. One `SeenSet` belongs to one expansion run, so
/// independent runs never observe each other's entries.
///
/// # Examples
///
/// ```
/// use amalgam::path::ResolvedPath;
/// use amalgam::SeenSet;
/// use std::path::Path;
///
/// let mut seen = SeenSet::new();
/// let key = ResolvedPath::new(Path::new("inc/a.h"));
/// assert!(seen.insert(key.clone()));
/// assert!(!seen.insert(key.clone()));
/// assert!(seen.contains(&key));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    paths: HashSet<ResolvedPath>,
}

impl SeenSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `path`, returning `true` if it was not already present.
    pub fn insert(&mut self, path: ResolvedPath) -> bool {
        self.paths.insert(path)
    }

    /// Returns true if `path` has been recorded.
    #[must_use]
    pub fn contains(&self, path: &ResolvedPath) -> bool {
        self.paths.contains(path)
    }

    /// Number of recorded paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over the recorded paths in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedPath> {
        self.paths.iter()
    }
}

impl Extend<ResolvedPath> for SeenSet {
    fn extend<T: IntoIterator<Item = ResolvedPath>>(&mut self, iter: T) {
        self.paths.extend(iter);
    }
}

impl FromIterator<ResolvedPath> for SeenSet {
    fn from_iter<T: IntoIterator<Item = ResolvedPath>>(iter: T) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
