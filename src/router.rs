use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::{DEFAULT_DIR_KEY, Document};

/// Trait for file status queries the router needs (for testability).
pub trait FileInspector {
    /// Whether the path is a symbolic link.
    fn is_symlink(&self, path: &Path) -> bool;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsInspector;

impl FileInspector for FsInspector {
    fn is_symlink(&self, path: &Path) -> bool {
        path.symlink_metadata()
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }
}

/// Partition changed files across the document's directory configs.
///
/// Directories are visited in declaration order. A named directory claims
/// the files contained in its subtree; `__default__` claims only files
/// contained in no named directory's subtree. Files listed in
/// `IGNORED_FILES` and symlinks are excluded everywhere. Each file is
/// claimed at most once, so no file appears in two subsets. Directories
/// with an empty subset are omitted.
#[must_use]
pub fn route(
    changed_files: &[PathBuf],
    document: &Document,
    inspector: &dyn FileInspector,
) -> IndexMap<String, Vec<PathBuf>> {
    let named_dirs: Vec<&Path> = document
        .dir_configs
        .keys()
        .filter(|key| *key != DEFAULT_DIR_KEY)
        .map(|key| Path::new(key.as_str()))
        .collect();

    let candidates: Vec<&PathBuf> = changed_files
        .iter()
        .filter(|file| !document.is_ignored(file) && !inspector.is_symlink(file))
        .collect();

    let mut claimed: HashSet<&PathBuf> = HashSet::new();
    let mut routes = IndexMap::new();

    for dir_key in document.dir_configs.keys() {
        let is_default = dir_key == DEFAULT_DIR_KEY;
        let mut subset = Vec::new();

        for file in &candidates {
            if claimed.contains(*file) {
                continue;
            }
            let matched = if is_default {
                // Catch-all: only files unclaimed by any named directory.
                !named_dirs.iter().any(|dir| file.starts_with(dir))
            } else {
                file.starts_with(Path::new(dir_key.as_str()))
            };
            if matched {
                claimed.insert(*file);
                subset.push((*file).clone());
            }
        }

        if !subset.is_empty() {
            routes.insert(dir_key.clone(), subset);
        }
    }

    routes
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
