//! Tree scanning.
//!
//! Recursively walks a directory and produces file entries with relative
//! paths normalized to forward slashes, plus the total byte count.

use std::path::Path;

use crate::CopyError;

/// A file discovered under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the root, `/`-separated on every platform.
    pub relative_path: String,
    pub size: i64,
}

/// Scans `root` recursively, returning its files and their total size.
///
/// Entries are visited in name order, matching the traversal order of
/// [`copy_tree`](crate::copy_tree).
pub fn scan_tree(root: &Path) -> Result<(Vec<FileEntry>, i64), CopyError> {
    let mut files = Vec::new();
    let mut total_size: i64 = 0;

    walk_dir(root, root, &mut files, &mut total_size)?;

    Ok((files, total_size))
}

fn walk_dir(
    root: &Path,
    current: &Path,
    files: &mut Vec<FileEntry>,
    total_size: &mut i64,
) -> Result<(), CopyError> {
    let mut entries = std::fs::read_dir(current)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let metadata = entry.metadata()?;

        if metadata.is_dir() {
            walk_dir(root, &path, files, total_size)?;
        } else if metadata.is_file() {
            let rel_path = path.strip_prefix(root).map_err(std::io::Error::other)?;

            // Normalize to forward slashes.
            let rel_str = rel_path.to_string_lossy().replace('\\', "/");
            let size = metadata.len() as i64;

            files.push(FileEntry {
                relative_path: rel_str,
                size,
            });
            *total_size += size;
        }
    }

    Ok(())
}
