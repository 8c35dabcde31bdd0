use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory names pruned from traversal when no custom exclusion set is given.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 4] = ["node_modules", "dist", "build", "tests"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrccatOptions {
    pub root: PathBuf,
    /// Target file extension, without the leading dot.
    pub extension: String,
    /// Directory names skipped at any depth. Matched exactly, not as globs.
    pub excluded_dirs: Vec<String>,
    pub follow_links: bool,
}
impl Default for SrccatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: String::from("ts"),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct SrccatBuilder {
    options: SrccatOptions,
}
impl SrccatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SrccatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.options.extension = ext.into();
        self
    }
    /// Replaces the default exclusion set entirely.
    pub fn excluded_dirs(mut self, dirs: Vec<String>) -> Self {
        self.options.excluded_dirs = dirs;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> SrccatOptions {
        self.options
    }
}
