//! Configuration file discovery and loading.

use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;
use crate::expander::read_text;
use crate::path::normalize::normalize_against;

/// Name of the file looked up by [`ConfigLoader::discover`].
pub const CONFIG_FILE_NAME: &str = "amalgam.yaml";

/// Loads run configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// Relative paths in the file are rebased onto the file's directory and
    /// `~` is expanded. An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid or
    /// contains unknown keys, or a path in it cannot be normalized.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = read_text(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(&contents)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        log::debug!("Loaded configuration from {}", path.display());
        Self::rebase(config, base)
    }

    /// Find the nearest `amalgam.yaml`, walking up from `start_dir`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use amalgam::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// if let Some(path) = ConfigLoader::discover(Path::new(".")) {
    ///     println!("using {}", path.display());
    /// }
    /// ```
    #[must_use]
    pub fn discover(start_dir: &Path) -> Option<PathBuf> {
        let mut current = start_dir.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn rebase(config: Config, base: &Path) -> Result<Config> {
        let rebase_one = |p: PathBuf| normalize_against(&p, base);
        Ok(Config {
            root: config.root.map(rebase_one).transpose()?,
            output: config.output.map(rebase_one).transpose()?,
            header: config.header.map(rebase_one).transpose()?,
            exclude: config
                .exclude
                .into_iter()
                .map(rebase_one)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}
