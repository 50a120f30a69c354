//! ELF format handler: `DT_NEEDED` entries of the dynamic section

use crate::common::ScanError;
use crate::imports::ModuleName;

/// Try to read the needed shared objects of an ELF image.
///
/// `Ok(None)` means the bytes are not ELF and the next format handler should
/// be tried. A valid ELF without a dynamic section simply has no imports.
pub(crate) fn try_parse(bytes: &[u8]) -> Result<Option<Vec<ModuleName>>, ScanError> {
    let elf = match goblin::elf::Elf::parse(bytes) {
        Ok(elf) => elf,
        Err(_) => return Ok(None),
    };

    // DT_NEEDED names are case-sensitive; duplicates are kept, deduplication
    // is the registry's job
    Ok(Some(
        elf.libraries
            .iter()
            .map(|lib| ModuleName::new(*lib, false))
            .collect(),
    ))
}
