//! List the dynamically-linked modules an executable or shared library asks
//! the loader for, by reading its own import metadata (ELF `DT_NEEDED`
//! entries, PE import directory table) instead of invoking a linker.
//!
//! Optionally the import set can be closed transitively over a pool of
//! candidate files gathered from a set of directories: every import that
//! matches a candidate by base name is resolved to that file, which is then
//! parsed for further imports in turn.

mod elf;
mod pe;

pub mod common;
pub mod executable;
pub mod imports;
pub mod pool;
pub mod resolver;


pub use common::{path_to_string, ScanError};
pub use executable::{extract_imports, scan_imports};
pub use imports::{ImportList, ModuleName};
pub use pool::CandidatePool;
pub use resolver::resolve;

use std::path::{Path, PathBuf};

/// Scan the given modules for imports and resolve them against the files
/// found under the given root directories.
pub fn resolve_from_dirs<P: AsRef<Path>, Q: AsRef<Path>>(
    modules: &[P],
    roots: &[Q],
) -> Result<Vec<PathBuf>, ScanError> {
    let imports = scan_imports(modules)?;
    let pool = CandidatePool::from_roots(roots)?;
    resolver::resolve(imports, &pool)
}
