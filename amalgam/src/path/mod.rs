//! Lexical path handling for include resolution.
//!
//! Every include is resolved against the directory of the file that contains
//! it, never against the working directory or the root file. The joined path
//! is then normalized lexically so that different spellings of the same
//! location (`./b.h`, `sub/../b.h`, `b.h`) produce one dedup key.
//!
//! Nothing here touches the filesystem: symlinks are preserved, and paths that
//! do not exist resolve just as well as paths that do.
//!
//! # Examples
//!
//! ```
//! use amalgam::path::ResolvedPath;
//! use std::path::Path;
//!
//! let resolved = ResolvedPath::for_include(Path::new("dir1/sub/b.h"), "c.h");
//! assert_eq!(resolved.as_path(), Path::new("dir1/sub/c.h"));
//!
//! let same = ResolvedPath::for_include(Path::new("dir1/a.h"), "sub/./x/../c.h");
//! assert_eq!(resolved, same);
//! ```

pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use types::ResolvedPath;
