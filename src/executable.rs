//! Import extraction from executable files, with attempt-based format
//! detection

use crate::common::ScanError;
use crate::imports::{ImportList, ModuleName};
use crate::{elf, pe};
use fs_err as fs;
use std::path::Path;

/// A format handler inspects raw file bytes. `Ok(None)` means the bytes are
/// not in this handler's format and the dispatcher should try the next one.
type FormatHandler = fn(&[u8]) -> Result<Option<Vec<ModuleName>>, ScanError>;

/// Handlers in detection order: ELF first, then PE
const FORMAT_HANDLERS: [FormatHandler; 2] = [elf::try_parse, pe::try_parse];

/// Read the list of modules the given binary asks the loader for.
///
/// The parsers report duplicates as-is and in file order; deduplication
/// happens in the [`ImportList`] the caller accumulates into. Fails with
/// [`ScanError::NotABinary`] if every format handler declines.
pub fn extract_imports<P: AsRef<Path>>(path: P) -> Result<Vec<ModuleName>, ScanError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ScanError::NotAFile(path.to_owned()));
    }

    let bytes = fs::read(path)?;
    for try_parse in FORMAT_HANDLERS {
        if let Some(imports) = try_parse(&bytes)? {
            return Ok(imports);
        }
    }
    Err(ScanError::NotABinary(path.to_owned()))
}

/// Extract the imports of every starting module into one deduplicated list.
///
/// Empty path arguments are skipped.
pub fn scan_imports<P: AsRef<Path>>(modules: &[P]) -> Result<ImportList, ScanError> {
    let mut imports = ImportList::new();
    for module in modules {
        if module.as_ref().as_os_str().is_empty() {
            continue;
        }
        for import in extract_imports(module)? {
            imports.append_if_new(import);
        }
    }
    Ok(imports)
}
