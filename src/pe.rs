//! PE format handler: import directory table walk over raw section bytes
//!
//! Only the headers and the section table go through goblin; the import
//! directory itself is read directly from the section's raw data. The
//! higher-level import accessors of binary-parsing libraries tend to choke on
//! stripped or packed binaries with partial import tables, and this scan must
//! stay lenient about individual garbage entries.

use crate::common::ScanError;
use crate::imports::ModuleName;
use goblin::pe::header::{Header, SIZEOF_COFF_HEADER, SIZEOF_PE_MAGIC};
use scroll::Pread;

/// Size of one Import Directory Table entry
const IMPORT_DIRECTORY_ENTRY_SIZE: usize = 20;

/// Offset of the name RVA within an Import Directory Table entry
const NAME_RVA_OFFSET: usize = 12;

/// Try to read the imported DLL names of a PE image.
///
/// `Ok(None)` means the bytes are not PE. A PE without an optional header
/// (an object file), with a data directory table too short to hold the
/// import entry, or whose import directory lies in no section, has zero
/// imports; none of these are errors.
pub(crate) fn try_parse(bytes: &[u8]) -> Result<Option<Vec<ModuleName>>, ScanError> {
    let header = match Header::parse(bytes) {
        Ok(header) => header,
        Err(_) => return Ok(None),
    };

    let optional_header = match header.optional_header {
        Some(optional_header) => optional_header,
        None => return Ok(Some(Vec::new())),
    };

    // present only if NumberOfRvaAndSizes covers index 1
    let import_directory = match optional_header.data_directories.get_import_table() {
        Some(import_directory) => *import_directory,
        None => return Ok(Some(Vec::new())),
    };

    let sections = {
        let optional_header_offset =
            header.dos_header.pe_pointer as usize + SIZEOF_PE_MAGIC + SIZEOF_COFF_HEADER;
        let mut offset =
            optional_header_offset + header.coff_header.size_of_optional_header as usize;
        match header.coff_header.sections(bytes, &mut offset) {
            Ok(sections) => sections,
            Err(_) => return Ok(None),
        }
    };

    // section whose virtual address range contains the import directory
    let import_rva = import_directory.virtual_address;
    let section = sections.iter().find(|s| {
        u64::from(s.virtual_address) <= u64::from(import_rva)
            && u64::from(import_rva) < u64::from(s.virtual_address) + u64::from(s.virtual_size)
    });
    let section = match section {
        Some(section) => section,
        None => return Ok(Some(Vec::new())),
    };

    let raw_start = section.pointer_to_raw_data as usize;
    let raw_end = raw_start + section.size_of_raw_data as usize;
    if raw_end > bytes.len() {
        // truncated section data, the file is not a usable PE
        return Ok(None);
    }
    let section_data = &bytes[raw_start..raw_end];

    let names = walk_import_directory(section_data, section.virtual_address, import_rva);

    // Windows module names are case-insensitive
    Ok(Some(
        names
            .into_iter()
            .map(|name| ModuleName::new(name, true))
            .collect(),
    ))
}

/// Walk the Import Directory Table within a section's raw data.
///
/// `section_va` is the section's virtual address, `import_va` the directory's
/// virtual address within that section. Entries are 20 bytes; a zero
/// "original first thunk" terminates the table. An entry whose name RVA
/// falls outside the section, or whose name has no terminating NUL,
/// contributes no name. Bounds are the section buffer only.
fn walk_import_directory(section_data: &[u8], section_va: u32, import_va: u32) -> Vec<String> {
    let mut names = Vec::new();

    let start = (import_va - section_va) as usize;
    if start > section_data.len() {
        return names;
    }

    let mut entry = &section_data[start..];
    while entry.len() >= IMPORT_DIRECTORY_ENTRY_SIZE {
        let original_first_thunk: u32 = entry.pread_with(0, scroll::LE).unwrap_or(0);
        if original_first_thunk == 0 {
            break;
        }
        let name_rva: u32 = entry.pread_with(NAME_RVA_OFFSET, scroll::LE).unwrap_or(0);
        let name_offset = i64::from(name_rva) - i64::from(section_va);
        if let Some(name) = read_import_name(section_data, name_offset) {
            names.push(name);
        }
        entry = &entry[IMPORT_DIRECTORY_ENTRY_SIZE..];
    }

    names
}

/// NUL-terminated ASCII name at the given offset into the section data, or
/// `None` if the offset is out of bounds or no terminator is found
fn read_import_name(section_data: &[u8], start: i64) -> Option<String> {
    if start < 0 || start as usize >= section_data.len() {
        return None;
    }
    let start = start as usize;
    let len = section_data[start..].iter().position(|&b| b == 0)?;
    Some(String::from_utf8_lossy(&section_data[start..start + len]).into_owned())
}
