//! Transitive resolution of imports against a candidate pool
//!
//! Work items are processed in discovery order; imports discovered while
//! parsing a matched file are enqueued at the tail of the same list, so the
//! loop bound grows as resolution proceeds. The registry's append-if-new is
//! the only thing keeping the worklist finite.

use crate::common::ScanError;
use crate::executable;
use crate::imports::{ImportList, ModuleName};
use crate::pool::CandidatePool;
use std::path::{Path, PathBuf};

/// Resolve every import to the first candidate file with a matching base
/// name, parsing each matched file for further imports until the worklist is
/// exhausted.
///
/// An import with no matching candidate is silently skipped: depending on a
/// system library outside the pool is expected. A parse failure on a matched
/// file aborts the whole resolution. The result keeps match order and is not
/// deduplicated; two distinct imports matching the same file yield that path
/// twice.
pub fn resolve(imports: ImportList, pool: &CandidatePool) -> Result<Vec<PathBuf>, ScanError> {
    resolve_with(imports, pool, |path| executable::extract_imports(path))
}

fn resolve_with<F>(
    mut imports: ImportList,
    pool: &CandidatePool,
    mut parse: F,
) -> Result<Vec<PathBuf>, ScanError>
where
    F: FnMut(&Path) -> Result<Vec<ModuleName>, ScanError>,
{
    let mut resolved = Vec::new();

    let mut i = 0;
    while i < imports.len() {
        let matched = pool.find(&imports[i]).map(Path::to_path_buf);
        if let Some(path) = matched {
            for import in parse(&path)? {
                imports.append_if_new(import);
            }
            resolved.push(path);
        }
        i += 1;
    }

    Ok(resolved)
}
