//! Candidate file pool: the flattened list of paths eligible to satisfy an
//! unresolved import

use crate::common::ScanError;
use crate::imports::ModuleName;
use fs_err as fs;
use std::path::{Path, PathBuf};

/// Directory recursion ceiling, guards against symlink cycles and
/// pathological trees
const MAX_WALK_DEPTH: usize = 1024;

/// Ordered list of candidate file paths, built once per invocation.
///
/// Order is traversal insertion order and only matters as the tie break for
/// "first matching file wins" when several candidates share a base name.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    files: Vec<PathBuf>,
}

impl CandidatePool {
    /// Flatten the given root paths into a pool of regular-file paths.
    ///
    /// A missing root, or a root that is neither a regular file nor a
    /// directory, is an error; the same conditions encountered while
    /// descending are tolerated and contribute no entries. Empty root
    /// arguments are skipped.
    pub fn from_roots<P: AsRef<Path>>(roots: &[P]) -> Result<Self, ScanError> {
        let mut files = Vec::new();
        for root in roots {
            if root.as_ref().as_os_str().is_empty() {
                continue;
            }
            walk(&mut files, root.as_ref(), 0, MAX_WALK_DEPTH)?;
        }
        Ok(Self { files })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// First pool entry whose base name matches the import under the
    /// import's own case policy
    pub fn find(&self, import: &ModuleName) -> Option<&Path> {
        self.files
            .iter()
            .find(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| import.matches(name))
                    .unwrap_or(false)
            })
            .map(PathBuf::as_path)
    }
}

fn walk(
    files: &mut Vec<PathBuf>,
    path: &Path,
    level: usize,
    max_depth: usize,
) -> Result<(), ScanError> {
    if level > max_depth {
        return Err(ScanError::TooManyLevels(path.to_owned()));
    }

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        // missing paths are fatal only as root arguments
        Err(e) if level == 0 => return Err(e.into()),
        Err(_) => return Ok(()),
    };

    if metadata.is_dir() {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            // unreadable subdirectories resolve to "no entries"
            Err(e) if level == 0 => return Err(e.into()),
            Err(_) => return Ok(()),
        };
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            walk(files, &entry.path(), level + 1, max_depth)?;
        }
    } else if metadata.is_file() {
        files.push(path.to_owned());
    } else if level == 0 {
        // sockets, device files and the like are ignored while descending
        return Err(ScanError::NotAPoolRoot(path.to_owned()));
    }

    Ok(())
}
