//! Command that performs the expansion.

use crate::error::CliError;
use crate::utils::{open_sink, GlobalOptions};
use amalgam::{init_logger, Config, ConfigLoader, RunSettings};
use clap::Args;
use std::env;
use std::path::PathBuf;

/// Expand a root file and its local includes into one output.
#[derive(Args)]
pub struct ExpandCommand {
    /// Root file to expand
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Write output to PATH instead of standard output
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Replace the root file's header block with the contents of PATH
    #[arg(short = 'H', long, value_name = "PATH")]
    pub header: Option<PathBuf>,

    /// Treat PATH as already included
    #[arg(short = 'e', long, value_name = "PATH", num_args = 0..)]
    pub exclude: Vec<PathBuf>,

    /// Read run settings from a YAML file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ExpandCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        if let Err(e) = logger.install() {
            logger.debug(&format!("Trace records disabled: {e}"));
        }

        let settings = self.resolve_settings()?;
        logger.debug(&format!("Expanding {}", settings.root.display()));

        // Read the header before the output is created, so a bad header path
        // does not truncate an existing output file.
        let options = settings.expand_options()?;
        let sink = open_sink(settings.output.as_deref())?;
        let summary = amalgam::expand(&settings.root, sink, &options)?;

        logger.info(&format!(
            "Emitted {} file(s): {} local include(s) inlined, {} system include(s) kept, {} duplicate(s) skipped",
            summary.files_emitted, summary.local_inlined, summary.system_passed, summary.skipped
        ));
        Ok(())
    }

    /// Combine the configuration file (explicit or discovered) with flags.
    fn resolve_settings(self) -> Result<RunSettings, CliError> {
        let config_path = match self.config {
            Some(path) => Some(path),
            None if self.root.is_none() => ConfigLoader::discover(&env::current_dir()?),
            None => None,
        };

        let file_config = match config_path {
            Some(path) => ConfigLoader::load_file(&path)?,
            None => Config::default(),
        };

        let flags = Config {
            root: self.root,
            output: self.output,
            header: self.header,
            exclude: self.exclude,
        };

        Ok(file_config.merge(flags).into_settings()?)
    }
}
