/*!
 * Configuration handling for packfs
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::{PackError, Result};

/// Command-line arguments for packfs
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "packfs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a txtar text archive from a directory or a file list",
    long_about = "Walks a directory tree, drops entries excluded by the root .gitignore, and \
                  concatenates the surviving files into a single txtar text archive. With a \
                  config file of newline separated paths, exactly those paths are archived \
                  instead."
)]
pub struct Args {
    /// Input directory to archive
    #[clap(default_value = ".")]
    pub input_dir: String,

    /// Output file, defaults to stdout
    pub output_file: Option<String>,

    /// File containing a newline separated list of paths to archive,
    /// bypasses the input directory and its .gitignore
    #[clap(short, long)]
    pub config: Option<String>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Where the archive entries come from
#[derive(Clone, Debug)]
pub enum Source {
    /// Walk this directory, filtered by its `.gitignore`
    Directory(PathBuf),
    /// Read the listed paths verbatim, no filtering
    FileList(PathBuf),
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Entry source for this run
    pub source: Source,

    /// Output path; `None` writes to stdout
    pub output: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let source = match args.config {
            Some(list) => Source::FileList(PathBuf::from(list)),
            None => Source::Directory(PathBuf::from(args.input_dir)),
        };
        Self {
            source,
            output: args.output_file.map(PathBuf::from),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match &self.source {
            Source::Directory(dir) => {
                if !dir.is_dir() {
                    return Err(PackError::Config(format!(
                        "input directory not found: {}",
                        dir.display()
                    )));
                }
            }
            Source::FileList(list) => {
                if !list.is_file() {
                    return Err(PackError::Config(format!(
                        "config file not found: {}",
                        list.display()
                    )));
                }
            }
        }

        // Check that the output file's directory exists before doing any work
        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if parent != Path::new("") && !parent.exists() {
                    return Err(PackError::Config(format!(
                        "output directory not found: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }
}
