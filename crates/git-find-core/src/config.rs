//! Configuration management for git-find.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure for git-find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the `site/repository/project/label` tree.
    pub root: PathBuf,
}

impl Config {
    /// Environment variable holding the tree root.
    pub const ROOT_ENV: &'static str = "__GIT_ROOT";

    /// Create a configuration for an explicit root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load configuration from the process environment.
    ///
    /// Fails with [`crate::Error::MissingRoot`] when `__GIT_ROOT` is unset or empty.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_env_value(std::env::var_os(Self::ROOT_ENV))
    }

    fn from_env_value(value: Option<OsString>) -> crate::Result<Self> {
        let root = match value {
            Some(v) if !v.is_empty() => PathBuf::from(v),
            _ => return Err(crate::Error::MissingRoot(Self::ROOT_ENV)),
        };

        let home = std::env::var("HOME").unwrap_or_else(|_| "/".to_string());
        let root = Self::expand_tilde(&root, &home);
        debug!("Using root: {}", root.display());

        Ok(Self { root })
    }

    /// Expand tilde in a single path.
    fn expand_tilde(path: &Path, home: &str) -> PathBuf {
        let path_str = path.to_string_lossy();

        if path_str == "~" {
            PathBuf::from(home)
        } else if let Some(rest) = path_str.strip_prefix("~/") {
            PathBuf::from(home).join(rest)
        } else {
            path.to_path_buf()
        }
    }
}

#[doc(hidden)]
pub fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
