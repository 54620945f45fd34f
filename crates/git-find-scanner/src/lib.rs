//! git-find-scanner: Enumerates the four-level tree under a root.

use git_find_core::entry::TREE_DEPTH;
use git_find_core::{Config, Entry};
use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Scanner for enumerating entries under the configured root.
pub struct Scanner {
    config: Config,
}

impl Scanner {
    /// Create a new scanner with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Enumerate every entry exactly four levels below the root.
    pub fn scan(&self) -> Vec<Entry> {
        enumerate(&self.config.root)
    }
}

/// Enumerate every path exactly four levels below `root`.
///
/// Expands `root/*/*/*/*`: names starting with `.` are never matched,
/// symlinked directories above the leaf are descended into, and leaves are
/// listed without being resolved, so dangling symlinks still show up. A
/// missing root yields no entries. Siblings come back in file name order.
pub fn enumerate(root: &Path) -> Vec<Entry> {
    info!("Scanning root: {}", root.display());

    let Some(pattern) = tree_pattern(root) else {
        debug!("Root is not valid UTF-8: {}", root.display());
        return Vec::new();
    };

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let paths = match glob_with(&pattern, options) {
        Ok(paths) => paths,
        Err(err) => {
            debug!("Invalid scan pattern {}: {}", pattern, err);
            return Vec::new();
        }
    };

    let entries: Vec<Entry> = paths
        .filter_map(|p| match p {
            Ok(p) => Some(p),
            Err(err) => {
                debug!("Skipping unreadable path: {}", err);
                None
            }
        })
        .filter_map(|p| {
            // glob drops the leading `./` when the root is the current directory
            let p = if p.starts_with(root) { p } else { root.join(p) };
            Entry::from_path(root, &p)
        })
        .collect();

    debug!("Found {} entries in {}", entries.len(), root.display());
    entries
}

/// Build the `root/*/*/*/*` pattern with the root itself matched literally.
fn tree_pattern(root: &Path) -> Option<String> {
    let mut pattern = PathBuf::from(Pattern::escape(root.to_str()?));
    for _ in 0..TREE_DEPTH {
        pattern.push("*");
    }
    pattern.to_str().map(str::to_string)
}
