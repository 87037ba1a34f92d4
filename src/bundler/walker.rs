//! Iterative directory traversal for manifest building.
//!
//! The walk runs on an explicit work stack instead of the call stack, so
//! arbitrarily deep (symlink-free) nesting cannot overflow it. Listings are
//! sorted by file name before use: manifest output must be reproducible
//! run-to-run and across platforms, and raw readdir order is neither.

use crate::models::MANIFEST_FILE_NAME;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// One filesystem entry produced by a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Absolute path of the entry.
    pub path: PathBuf,
    /// Whether the entry is a directory (it will be descended into).
    pub is_dir: bool,
}

/// Depth-first traversal of a subtree on an explicit work stack.
///
/// Each directory's children are emitted in file-name order, and a
/// directory is always emitted before anything beneath it. Entries named
/// `manifest.json` are neither emitted nor descended; they are
/// profile-internal metadata, not bundle content. A directory that cannot
/// be listed is logged at warn level and yields nothing.
///
/// Every call to [`TreeWalker::walk`] starts a fresh traversal; instances
/// are not shared or reused across walks.
#[derive(Debug)]
pub struct TreeWalker {
    /// Directories whose listings are still pending.
    stack: Vec<PathBuf>,
    /// Listed entries not yet handed out.
    pending: VecDeque<WalkEntry>,
}

impl TreeWalker {
    /// Starts a walk over everything beneath `root` (the root itself is not
    /// emitted).
    pub fn walk(root: &Path) -> Self {
        Self {
            stack: vec![root.to_path_buf()],
            pending: VecDeque::new(),
        }
    }

    fn list(dir: &Path) -> VecDeque<WalkEntry> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("cannot list {}, skipping subtree: {}", dir.display(), err);
                return VecDeque::new();
            }
        };
        let mut listed: Vec<WalkEntry> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name() != MANIFEST_FILE_NAME)
            .map(|entry| {
                let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
                WalkEntry {
                    path: entry.path(),
                    is_dir,
                }
            })
            .collect();
        listed.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        listed.into()
    }
}

impl Iterator for TreeWalker {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        loop {
            if let Some(entry) = self.pending.pop_front() {
                if entry.is_dir {
                    self.stack.push(entry.path.clone());
                }
                return Some(entry);
            }
            let dir = self.stack.pop()?;
            self.pending = Self::list(&dir);
        }
    }
}
