//! Recursive include expansion.
//!
//! The [`Expander`] reads a root file and writes it to a sink with every local
//! include replaced by the included file's body. Each resolved path is handled
//! at most once per run, which both removes duplicate copies on diamond-shaped
//! include graphs and stops cycles.
//!
//! # Output layout
//!
//! - The replacement header text, verbatim, when one is given.
//! - For each file emitted (the root first): one blank line, then the file's
//!   lines in order.
//! - A dependency's header block (its leading lines before the first line
//!   starting with `#`) is dropped. The root's header block is dropped only
//!   when a replacement header was supplied.
//!
//! # Examples
//!
//! ```no_run
//! use amalgam::{expand, ExpandOptions};
//! use std::path::{Path, PathBuf};
//!
//! let options = ExpandOptions::new()
//!     .with_header(Some("// single-header build\n".to_string()))
//!     .with_exclude(vec![PathBuf::from("include/lib/config.h")]);
//!
//! let mut out = Vec::new();
//! let summary = expand(Path::new("include/lib/lib.h"), &mut out, &options).unwrap();
//! println!("inlined {} files", summary.local_inlined);
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::directive::{is_marker_line, parse_include, QuoteStyle};
use crate::error::{Error, Result};
use crate::path::ResolvedPath;
use crate::seen::SeenSet;

/// Written before the body of every emitted file.
const SEPARATOR: &str = "\n";

/// Options for an expansion run.
#[derive(Debug, Clone, Default)]
pub struct ExpandOptions {
    /// Text that replaces the root file's own header block.
    pub header: Option<String>,

    /// Paths treated as already included before expansion starts.
    pub exclude: Vec<PathBuf>,
}

impl ExpandOptions {
    /// Creates options with no replacement header and no exclusions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement header text.
    #[must_use]
    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.header = header;
        self
    }

    /// Sets the pre-excluded paths.
    #[must_use]
    pub fn with_exclude(mut self, exclude: Vec<PathBuf>) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Counts gathered during a run, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionSummary {
    /// Files whose bodies were written, the root included.
    pub files_emitted: usize,
    /// Local includes replaced by file contents.
    pub local_inlined: usize,
    /// System includes written through unchanged.
    pub system_passed: usize,
    /// Include lines dropped because their target was already seen.
    pub skipped: usize,
}

/// Expands includes into a sink, tracking what has been handled.
///
/// Consecutive calls to [`Expander::expand`] on one expander share the same
/// [`SeenSet`], so they behave as one run.
pub struct Expander<W: Write> {
    sink: W,
    seen: SeenSet,
    summary: ExpansionSummary,
}

impl<W: Write> Expander<W> {
    /// Creates an expander writing to `sink` with an empty seen set.
    pub fn new(sink: W) -> Self {
        Self::with_seen(sink, SeenSet::new())
    }

    /// Creates an expander with a pre-populated seen set.
    pub fn with_seen(sink: W, seen: SeenSet) -> Self {
        Self {
            sink,
            seen,
            summary: ExpansionSummary::default(),
        }
    }

    /// Marks `path` as already included.
    pub fn exclude(&mut self, path: &Path) {
        let resolved = ResolvedPath::new(path);
        log::debug!("Pre-excluding {resolved}");
        self.seen.insert(resolved);
    }

    /// Writes `header` (if any) followed by the expansion of `root`, then
    /// flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the root or any local include cannot be
    /// read, [`Error::Parse`] for a malformed include line, and
    /// [`Error::Sink`] if writing fails. Output written before the failure
    /// stays in the sink.
    pub fn expand(&mut self, root: &Path, header: Option<&str>) -> Result<ExpansionSummary> {
        if let Some(text) = header {
            self.write(text)?;
        }
        self.emit(root, header.is_some())?;
        self.sink.flush().map_err(Error::Sink)?;
        Ok(self.summary)
    }

    /// Returns the set of handled paths.
    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    /// Returns the counts gathered so far.
    pub fn summary(&self) -> ExpansionSummary {
        self.summary
    }

    /// Consumes the expander, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, path: &Path, drop_header: bool) -> Result<()> {
        let content = read_text(path)?;
        self.write(SEPARATOR)?;
        self.summary.files_emitted += 1;

        let mut in_header = drop_header;
        for (index, line) in content.split_inclusive('\n').enumerate() {
            if in_header {
                if is_marker_line(line) {
                    in_header = false;
                } else {
                    continue;
                }
            }

            let directive = parse_include(line).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                reason: e.to_string(),
            })?;
            let Some(directive) = directive else {
                self.write(line)?;
                continue;
            };

            let resolved = ResolvedPath::for_include(path, directive.raw_path);
            if !self.seen.insert(resolved.clone()) {
                log::debug!("Skipping {resolved}: already seen");
                self.summary.skipped += 1;
                continue;
            }

            // System includes are recorded too, so a later local include of
            // the same resolved path is skipped.
            match directive.quote_style {
                QuoteStyle::Local => {
                    log::debug!("Inlining {resolved} from {}", path.display());
                    self.summary.local_inlined += 1;
                    self.emit(resolved.as_path(), true)?;
                }
                QuoteStyle::System => {
                    self.summary.system_passed += 1;
                    self.write(line)?;
                }
            }
        }

        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.sink.write_all(text.as_bytes()).map_err(Error::Sink)
    }
}

/// Read a whole text file, mapping failures to [`Error::NotFound`].
///
/// # Errors
///
/// Returns an error if the file does not exist, is unreadable, or is not
/// valid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::NotFound {
        path: path.to_path_buf(),
        source,
    })
}

/// Expand `root` into `sink` in a fresh run.
///
/// # Errors
///
/// See [`Expander::expand`].
pub fn expand<W: Write>(root: &Path, sink: W, options: &ExpandOptions) -> Result<ExpansionSummary> {
    let mut expander = Expander::new(sink);
    for path in &options.exclude {
        expander.exclude(path);
    }
    expander.expand(root, options.header.as_deref())
}

/// Expand `root` into a string in a fresh run.
///
/// # Errors
///
/// See [`expand`].
///
/// # Examples
///
/// ```no_run
/// use amalgam::{expand_to_string, ExpandOptions};
/// use std::path::Path;
///
/// let flat = expand_to_string(Path::new("a.h"), &ExpandOptions::new()).unwrap();
/// print!("{flat}");
/// ```
pub fn expand_to_string(root: &Path, options: &ExpandOptions) -> Result<String> {
    let mut out = Vec::new();
    expand(root, &mut out, options)?;
    // Everything written came from `&str` values.
    String::from_utf8(out)
        .map_err(|e| Error::Sink(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
