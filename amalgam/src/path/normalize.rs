//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Resolving `.` and `..` components without consulting the filesystem
//! - Anchoring relative paths to a base directory

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use amalgam::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.ends_with("project"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("include/a.h")).unwrap();
/// assert_eq!(expanded, Path::new("include/a.h"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components lexically.
///
/// Works on relative and absolute paths alike. A `..` removes the preceding
/// normal component when there is one; leading `..` components of a relative
/// path are kept. A `..` at the root of an absolute path stays at the root,
/// as it does on the filesystem.
///
/// # Examples
///
/// ```
/// use amalgam::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("../x/./y/../z.h"));
/// assert_eq!(resolved, PathBuf::from("../x/z.h"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::RootDir => result.push(component),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => match result.components().next_back() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    result.push(Component::ParentDir);
                }
            },
        }
    }

    result
}

/// Normalize a user-supplied path relative to `base`.
///
/// Expands tilde, joins relative results onto `base`, and resolves `.` and
/// `..` components. Used for paths read from configuration files, which are
/// relative to the file's own directory.
///
/// # Errors
///
/// Returns an error if tilde expansion fails.
///
/// # Examples
///
/// ```
/// use amalgam::path::normalize::normalize_against;
/// use std::path::Path;
///
/// let p = normalize_against(Path::new("../src/lib.h"), Path::new("project/tools")).unwrap();
/// assert_eq!(p, Path::new("project/src/lib.h"));
/// ```
pub fn normalize_against(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(resolve_components(&expanded))
    } else {
        Ok(resolve_components(&base.join(expanded)))
    }
}
