use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Depth-first file listing of a directory tree.
///
/// Children of every directory are visited in lexicographic order and
/// directories whose name is in `skip_dirs` are not descended into. Files are
/// never filtered here.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: PathBuf,
    skip_dirs: Vec<String>,
}

impl TreeWalker {
    pub fn new<P: AsRef<Path>>(root: P, skip_dirs: &[String]) -> Self {
        Self { root: root.as_ref().to_path_buf(), skip_dirs: skip_dirs.to_vec() }
    }

    /// Starts a fresh walk over the tree as it is on disk right now.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !self.is_skipped_dir(entry.file_name())
            })
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => None,
                Ok(entry) => Some(Ok(entry.into_path())),
                Err(e) => Some(Err(Error::from(e))),
            })
    }

    fn is_skipped_dir(&self, name: &std::ffi::OsStr) -> bool {
        self.skip_dirs.iter().any(|skipped| name == skipped.as_str())
    }
}

/// Walks `root`, pruning directories named in `skip_dirs`.
pub fn walk<P: AsRef<Path>>(root: P, skip_dirs: &[String]) -> Result<Vec<PathBuf>> {
    TreeWalker::new(root, skip_dirs).walk().collect()
}
