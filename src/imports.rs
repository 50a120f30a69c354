//! Imported module names and the order-preserving registry that collects them

use serde::Serialize;

/// A module name as it appears in a binary's import metadata
///
/// The case policy travels with the name: PE import tables name modules
/// case-insensitively, ELF `DT_NEEDED` entries are case-sensitive. The flag
/// is set by the format handler that produced the entry and governs every
/// comparison this entry takes part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleName {
    pub name: String,
    pub case_insensitive: bool,
}

impl ModuleName {
    pub fn new<S: Into<String>>(name: S, case_insensitive: bool) -> Self {
        Self {
            name: name.into(),
            case_insensitive,
        }
    }

    /// Compare against a candidate file base name under this entry's own
    /// case policy
    pub fn matches(&self, candidate: &str) -> bool {
        if self.case_insensitive {
            self.name.to_uppercase() == candidate.to_uppercase()
        } else {
            self.name == candidate
        }
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Deduplicating collection of imports, preserving discovery order
///
/// Not a set keyed by a normalized string: the comparison policy is
/// per-entry, and a new entry is checked against the existing ones under its
/// *own* flag. The first-seen spelling wins.
#[derive(Debug, Clone, Default)]
pub struct ImportList {
    entries: Vec<ModuleName>,
}

impl ImportList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless an entry already present compares equal to the new one
    /// under the new entry's case policy; insertion is at the end.
    pub fn append_if_new(&mut self, candidate: ModuleName) {
        if !self.entries.iter().any(|e| candidate.matches(&e.name)) {
            self.entries.push(candidate);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleName> {
        self.entries.iter()
    }

    /// Raw names, sorted lexically (case-sensitive regardless of each
    /// entry's own comparison policy)
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl std::ops::Index<usize> for ImportList {
    type Output = ModuleName;

    fn index(&self, index: usize) -> &ModuleName {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a ImportList {
    type Item = &'a ModuleName;
    type IntoIter = std::slice::Iter<'a, ModuleName>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
