use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilenameListError {
    #[error("Filename list is empty")]
    Empty,
    #[error("Filename list '{list}' has an empty entry at position {position}")]
    EmptyEntry { list: String, position: usize },
}

/// Splits a comma-separated filename list such as `"a.txt, b.txt ,c.txt"`.
///
/// Whitespace around each name is discarded and input order is preserved.
pub fn split_filename_list(list: &str) -> Result<Vec<PathBuf>, FilenameListError> {
    if list.trim().is_empty() {
        return Err(FilenameListError::Empty);
    }
    list.split(',')
        .enumerate()
        .map(|(i, name)| {
            let name = name.trim();
            if name.is_empty() {
                Err(FilenameListError::EmptyEntry {
                    list: list.to_string(),
                    position: i + 1,
                })
            } else {
                Ok(PathBuf::from(name))
            }
        })
        .collect()
}

/// Name used for a table's column block: the file name up to its first `.`.
pub fn derive_table_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    file_name
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}
