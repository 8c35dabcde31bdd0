use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single collected file: its path relative to the traversal root, and its contents.
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectedFile {
    /// Path relative to the traversal root.
    pub path: PathBuf,
    /// The file's contents, decoded strictly as UTF-8.
    ///
    /// Files that are not valid UTF-8 text never appear in a result; they are
    /// skipped during collection with a logged warning.
    pub content: String,
}

/// The complete result of a collection run.
///
/// Entries are ordered deterministically: a directory's own files (sorted by
/// name) come before any of its subdirectories' files, and sibling
/// directories are visited in lexicographic order.
#[derive(Debug, Serialize, Deserialize)]
pub struct SrccatResult {
    pub files: Vec<CollectedFile>,
}
