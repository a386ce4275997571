//! Breadth-first listing of the data directory.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// One entry found while walking a directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1 for direct children of the root.
    pub depth: usize,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Walk `root` breadth-first, descending at most `max_depth` levels.
///
/// Entries of one directory are sorted by name. Subdirectories that cannot
/// be read are logged and skipped; an unreadable root is an error.
pub fn traverse(root: &Path, max_depth: usize) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut pending = VecDeque::from([(root.to_path_buf(), 0)]);

    while let Some((dir, depth)) = pending.pop_front() {
        if depth >= max_depth {
            continue;
        }
        let children = match read_sorted(&dir) {
            Ok(children) => children,
            Err(e) if depth == 0 => {
                return Err(e)
                    .with_context(|| format!("failed to read directory: {}", dir.display()));
            }
            Err(e) => {
                tracing::warn!("access denied: {}: {}", dir.display(), e);
                continue;
            }
        };
        for path in children {
            let is_dir = path.is_dir();
            if is_dir {
                pending.push_back((path.clone(), depth + 1));
            }
            entries.push(Entry {
                depth: depth + 1,
                path,
                is_dir,
            });
        }
    }

    Ok(entries)
}

fn read_sorted(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}
