/*!
 * Output sink for serialized archives
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{PackError, Result};

/// Writes serialized archive bytes to the configured destination
pub struct ArchiveWriter {
    /// Writer configuration
    config: Config,
}

impl ArchiveWriter {
    /// Create a new writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the whole archive in one call, to stdout or the output file
    ///
    /// The output file is created or truncated, written in full, and
    /// flushed; handles are released on every exit path.
    pub fn write(&self, data: &[u8]) -> Result<()> {
        match &self.config.output {
            Some(path) => {
                let file = File::create(path).map_err(|err| PackError::io(path.clone(), err))?;
                let mut writer = BufWriter::new(file);
                writer
                    .write_all(data)
                    .and_then(|_| writer.flush())
                    .map_err(|err| PackError::io(path.clone(), err))
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(data)
                    .and_then(|_| stdout.flush())
                    .map_err(|err| PackError::io(PathBuf::from("stdout"), err))
            }
        }
    }
}
