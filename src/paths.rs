//! Path discovery and readability filtering
//!
//! Resolves raw CLI path arguments into the flat, deduplicated list of
//! regular files the counting phase will read:
//! - Directories are expanded recursively
//! - Symbolic links are never followed
//! - Non-existent and unreadable entries are warned about and skipped
//! - Exclude patterns filter paths during traversal
//!
//! Discovery is best-effort by design: a path that cannot be accessed
//! costs a warning, never the run.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// The resolved set of files to count
#[derive(Debug, Default)]
pub struct PathSet {
    /// Deduplicated regular-file paths, in sorted order
    files: Vec<PathBuf>,

    /// Entries skipped because they were missing or unreadable
    skipped: u64,

    /// Entries dropped by an exclude pattern
    excluded: u64,
}

impl PathSet {
    /// Resolve `raw_paths` into the files to count
    pub fn discover(raw_paths: &[String], excludes: &[Regex]) -> Self {
        let mut seen = BTreeSet::new();
        let mut skipped = 0u64;
        let mut excluded = 0u64;

        for raw in raw_paths {
            let path = Path::new(raw);

            let meta = match path.symlink_metadata() {
                Ok(meta) => meta,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Path skipped: does not exist or is not accessible");
                    skipped += 1;
                    continue;
                }
            };

            if meta.file_type().is_symlink() {
                debug!(path = %path.display(), "Symbolic link not followed");
                skipped += 1;
            } else if meta.is_dir() {
                walk_directory(path, excludes, &mut seen, &mut skipped, &mut excluded);
            } else if meta.is_file() {
                add_if_readable(path, excludes, &mut seen, &mut skipped, &mut excluded);
            } else {
                debug!(path = %path.display(), "Not a regular file; skipped");
                skipped += 1;
            }
        }

        debug!(
            files = seen.len(),
            skipped = skipped,
            excluded = excluded,
            "Path discovery finished"
        );

        Self {
            files: seen.into_iter().collect(),
            skipped,
            excluded,
        }
    }

    /// Discovered files in sorted order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Consume into the path list for the counting phase
    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }

    /// Number of discovered files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if nothing survived discovery
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Entries skipped as missing or unreadable
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Entries dropped by exclude patterns
    pub fn excluded(&self) -> u64 {
        self.excluded
    }
}

/// Recursively collect regular files under `root` without following
/// symbolic links
fn walk_directory(
    root: &Path,
    excludes: &[Regex],
    seen: &mut BTreeSet<PathBuf>,
    skipped: &mut u64,
    excluded: &mut u64,
) {
    for entry in WalkDir::new(root).follow_links(false) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                add_if_readable(entry.path(), excludes, seen, skipped, excluded);
            }
            Ok(_) => {} // directories and symlinks
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Entry skipped during traversal");
                *skipped += 1;
            }
        }
    }
}

/// Add a regular file to the set if it is readable and not excluded
fn add_if_readable(
    path: &Path,
    excludes: &[Regex],
    seen: &mut BTreeSet<PathBuf>,
    skipped: &mut u64,
    excluded: &mut u64,
) {
    if is_excluded(path, excludes) {
        debug!(path = %path.display(), "Excluded by pattern");
        *excluded += 1;
        return;
    }

    // Readability means an open succeeds; metadata permission bits lie on
    // some filesystems.
    match File::open(path) {
        Ok(_) => {
            seen.insert(path.to_path_buf());
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "File skipped: not readable");
            *skipped += 1;
        }
    }
}

fn is_excluded(path: &Path, excludes: &[Regex]) -> bool {
    let text = path.to_string_lossy();
    excludes.iter().any(|re| re.is_match(&text))
}
