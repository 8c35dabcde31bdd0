use crate::error::SrccatError;
use crate::options::SrccatOptions;
use crate::types::{CollectedFile, SrccatResult};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &SrccatOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        // The exclusion set is the only traversal filter: no gitignore
        // handling, hidden files are visited.
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        let excluded = options.excluded_dirs.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            match entry.file_type() {
                Some(ft) if ft.is_dir() => {
                    let name = entry.file_name();
                    !excluded.iter().any(|d| name == d.as_str())
                }
                _ => true,
            }
        });
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<ignore::DirEntry, SrccatError>> {
        self.inner
            .map(|result| result.map_err(|e| SrccatError::Walk(e.to_string())))
    }
}
fn read_file_content(path: &Path) -> Result<String, SrccatError> {
    let bytes = fs::read(path).map_err(|e| SrccatError::io(path, e))?;
    let sniff = &bytes[..bytes.len().min(4096)];
    if content_inspector::inspect(sniff).is_binary() {
        return Err(SrccatError::NonText(path.to_path_buf()));
    }
    String::from_utf8(bytes).map_err(|_| SrccatError::NonText(path.to_path_buf()))
}
/// Walks the root directory and collects every file whose name ends with the
/// target suffix, skipping excluded directories at any depth.
///
/// Individual files that cannot be read or decoded are logged and skipped;
/// only an invalid root aborts the run.
pub fn collect(options: SrccatOptions) -> Result<SrccatResult, SrccatError> {
    if !options.root.is_dir() {
        return Err(SrccatError::NotADirectory(options.root));
    }
    tracing::debug!("scanning {}", options.root.display());
    let suffix = format!(".{}", options.extension.trim_start_matches('.'));
    let mut files = Vec::new();
    for result in Walker::new(&options).into_iter() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("{e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(&options.root).unwrap_or(path);
        match read_file_content(path) {
            Ok(content) => files.push(CollectedFile {
                path: relative.to_path_buf(),
                content,
            }),
            Err(e) => tracing::warn!("skipping file: {e}"),
        }
    }
    // Sorting on (parent, name) puts a directory's own files ahead of its
    // subdirectories' files and makes repeated runs byte-identical.
    files.sort_by(|a, b| {
        let parent_a = a.path.parent().unwrap_or_else(|| Path::new(""));
        let parent_b = b.path.parent().unwrap_or_else(|| Path::new(""));
        parent_a
            .components()
            .cmp(parent_b.components())
            .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
    });
    tracing::debug!("collected {} files", files.len());
    Ok(SrccatResult { files })
}
