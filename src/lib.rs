/*!
 * PackFS - Create txtar text archives from directory contents
 *
 * This library walks a directory tree, drops entries excluded by the root
 * `.gitignore`, and concatenates the surviving files into a single
 * flat-text archive. An explicit path list can be archived instead,
 * bypassing the filter entirely.
 */

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config, Source};
pub use error::{PackError, Result};
pub use filter::PathFilter;
pub use scanner::Scanner;
pub use types::{Archive, Entry};
pub use writer::ArchiveWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
