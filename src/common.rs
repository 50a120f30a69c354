use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// The path does not point to a regular file
    #[error("Not a file: '{}'", .0.display())]
    NotAFile(PathBuf),

    /// The file matches neither supported binary format
    #[error("Unknown module type: '{}'", .0.display())]
    NotABinary(PathBuf),

    /// Directory traversal went past the recursion ceiling
    #[error("Too many directory recursion levels under '{}'", .0.display())]
    TooManyLevels(PathBuf),

    /// A pool root argument is neither a regular file nor a directory
    #[error("Not a regular file or directory: '{}'", .0.display())]
    NotAPoolRoot(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn path_to_string<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().into_owned()
}
