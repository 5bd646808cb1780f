/*!
 * Entry collection for both archive sources
 */

use std::fs;
use std::path::{Component, Path};

use walkdir::WalkDir;

use crate::config::{Config, Source};
use crate::error::{PackError, Result};
use crate::filter::PathFilter;
use crate::types::{Archive, Entry};

/// Collects the files to archive according to the configured source
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Produce the archive for the configured source
    pub fn scan(&self) -> Result<Archive> {
        match &self.config.source {
            Source::Directory(dir) => scan_directory(dir),
            Source::FileList(list) => scan_file_list(list),
        }
    }
}

/// Walk `root` depth-first and archive every file its `.gitignore` keeps
///
/// Siblings are visited in lexical order so a fixed tree always yields the
/// same archive. Only regular files become entries; symlinks are not
/// followed. Any traversal or read error aborts the scan, so no partial
/// archive is ever produced.
fn scan_directory(root: &Path) -> Result<Archive> {
    let filter = PathFilter::for_root(root)?;
    let mut archive = Archive::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            PackError::io(path, err.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        // walkdir only yields paths under root
        let rel = match entry.path().strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        if filter.should_skip(rel) {
            continue;
        }

        let content = fs::read(entry.path()).map_err(|err| PackError::io(entry.path(), err))?;
        archive.entries.push(Entry {
            name: slash_path(rel),
            content,
        });
    }

    Ok(archive)
}

/// Archive exactly the paths listed in `list`, one per line, in file order
///
/// Lines are literal paths, resolved against the working directory, and are
/// used verbatim as entry names. Empty lines yield no entry. `.gitignore`
/// rules do not apply here.
fn scan_file_list(list: &Path) -> Result<Archive> {
    let text = fs::read_to_string(list).map_err(|err| PackError::io(list, err))?;
    let mut archive = Archive::default();

    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        let content = fs::read(line).map_err(|err| PackError::io(line, err))?;
        archive.entries.push(Entry {
            name: line.to_string(),
            content,
        });
    }

    Ok(archive)
}

/// Render a relative path with forward slashes regardless of platform
fn slash_path(rel: &Path) -> String {
    let parts: Vec<_> = rel
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    parts.join("/")
}
