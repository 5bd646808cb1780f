//! Path filtering against the scan root's `.gitignore`

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{PackError, Result};

/// Decides which relative paths are excluded from a directory scan
///
/// A root without a `.gitignore` gets the [`PathFilter::Open`] variant,
/// which never skips anything.
#[derive(Debug)]
pub enum PathFilter {
    /// No ignore rules; every path is kept
    Open,
    /// Compiled rules from the root's `.gitignore`
    Rules(Gitignore),
}

impl PathFilter {
    /// Build the filter for a scan root from `<root>/.gitignore`
    ///
    /// A missing rules file is not an error. An unreadable or malformed one
    /// is, and aborts the run before any traversal starts.
    pub fn for_root(root: &Path) -> Result<Self> {
        let rules_path = root.join(".gitignore");
        if !rules_path.exists() {
            return Ok(Self::Open);
        }

        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(&rules_path) {
            return Err(PackError::Config(format!(
                "error parsing {}: {}",
                rules_path.display(),
                err
            )));
        }
        let rules = builder.build().map_err(|err| {
            PackError::Config(format!("error parsing {}: {}", rules_path.display(), err))
        })?;
        Ok(Self::Rules(rules))
    }

    /// Whether the file at `rel` (relative to the scan root) is excluded
    ///
    /// Matches with gitignore precedence: later patterns win and `!`
    /// patterns re-include. Parent directories are consulted, so `build/`
    /// also excludes the files underneath it.
    pub fn should_skip(&self, rel: &Path) -> bool {
        match self {
            Self::Open => false,
            Self::Rules(rules) => rules.matched_path_or_any_parents(rel, false).is_ignore(),
        }
    }
}
