//! Entries of the four-level `site/repository/project/label` tree.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Number of path components between the root and an entry.
pub const TREE_DEPTH: usize = 4;

/// One matched path under the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Path relative to the root, components joined by `/`.
    pub relative_path: String,
    pub site: String,
    pub repository: String,
    pub project: String,
    pub label: String,
}

impl Entry {
    /// Build an entry from a path found under `root`.
    ///
    /// Returns `None` unless `path` lies exactly [`TREE_DEPTH`] components below `root`.
    pub fn from_path(root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;

        let mut parts = Vec::with_capacity(TREE_DEPTH);
        for component in relative.components() {
            match component {
                Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
                _ => return None,
            }
        }

        let [site, repository, project, label]: [String; TREE_DEPTH] = parts.try_into().ok()?;

        Some(Self {
            relative_path: format!("{site}/{repository}/{project}/{label}"),
            site,
            repository,
            project,
            label,
        })
    }

    /// The four identifiers in `site, repository, project, label` order.
    pub fn identifiers(&self) -> [&str; TREE_DEPTH] {
        [&self.site, &self.repository, &self.project, &self.label]
    }

    /// Reattach the root to get the path this entry was built from.
    ///
    /// Components that were not valid UTF-8 were converted lossily by
    /// [`Entry::from_path`], so for those entries the result names a
    /// different path than the one scanned.
    pub fn full_path(&self, root: &Path) -> PathBuf {
        root.join(&self.relative_path)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_extracts_identifiers() {
        let entry = Entry::from_path(
            Path::new("/root"),
            Path::new("/root/github/alice/myproj/v1"),
        )
        .unwrap();

        assert_eq!(entry.relative_path, "github/alice/myproj/v1");
        assert_eq!(entry.site, "github");
        assert_eq!(entry.repository, "alice");
        assert_eq!(entry.project, "myproj");
        assert_eq!(entry.label, "v1");
        assert_eq!(entry.identifiers(), ["github", "alice", "myproj", "v1"]);
    }

    #[test]
    fn test_from_path_rejects_wrong_depth() {
        let root = Path::new("/root");
        assert!(Entry::from_path(root, Path::new("/root/github/alice/myproj")).is_none());
        assert!(Entry::from_path(root, Path::new("/root/github/alice/myproj/v1/src")).is_none());
        assert!(Entry::from_path(root, Path::new("/root")).is_none());
    }

    #[test]
    fn test_from_path_rejects_outside_root() {
        assert!(Entry::from_path(
            Path::new("/root"),
            Path::new("/elsewhere/github/alice/myproj/v1")
        )
        .is_none());
    }

    #[test]
    fn test_from_path_trailing_slash_root() {
        let entry = Entry::from_path(
            Path::new("/root/"),
            Path::new("/root/github/alice/myproj/v1"),
        )
        .unwrap();
        assert_eq!(entry.relative_path, "github/alice/myproj/v1");
    }

    #[test]
    fn test_full_path_roundtrip() {
        let root = Path::new("/srv/git");
        let path = Path::new("/srv/git/gitlab/bob/other/v2");
        let entry = Entry::from_path(root, path).unwrap();

        assert_eq!(entry.full_path(root), path);
        assert_eq!(entry.to_string(), "gitlab/bob/other/v2");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_component_is_lossy() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = Path::new("/srv/git");
        let path = root.join("github/alice/myproj").join(OsStr::from_bytes(b"v\xff"));
        let entry = Entry::from_path(root, &path).unwrap();

        assert_eq!(entry.label, "v\u{FFFD}");
        assert_eq!(entry.relative_path, "github/alice/myproj/v\u{FFFD}");
        assert_ne!(entry.full_path(root), path);
    }
}
