//! Output rendering for collection results.
//!
//! Formats a [`SrccatResult`] into a single Markdown document: one block per
//! collected file, with a `## File:` heading, a fence tagged with the source
//! language, the raw contents, and a closing fence. File contents are
//! preserved exactly.

use crate::{SrccatError, SrccatResult};
use std::fs;
use std::path::Path;

/// Default name of the generated document, resolved against the current
/// working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "backend_src.md";

/// Renders the result into the bundled Markdown document.
pub fn render_markdown(result: &SrccatResult) -> String {
    let mut out = String::with_capacity(1024);
    for (i, file) in result.files.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let ext = file.path.extension().and_then(|e| e.to_str()).unwrap_or("");
        out.push_str(&format!(
            "## File: {}\n\n```{}\n",
            file.path.display(),
            language_from_extension(ext)
        ));
        out.push_str(&file.content);
        out.push_str("\n```\n");
    }
    out
}

/// Renders the result and writes it to `path` in one write.
///
/// On failure nothing is guaranteed about the file's prior contents.
pub fn write_markdown(result: &SrccatResult, path: impl AsRef<Path>) -> Result<(), SrccatError> {
    let content = render_markdown(result);
    fs::write(&path, content).map_err(|e| SrccatError::io(path.as_ref(), e))?;
    Ok(())
}

fn language_from_extension(ext: &str) -> &'static str {
    match ext {
        "ts" | "tsx" => "typescript", "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "rs" => "rust", "toml" => "toml", "json" => "json", "md" | "markdown" => "markdown",
        "txt" => "text", "html" | "htm" => "html", "css" => "css",
        "py" => "python", "sh" | "bash" => "bash", "yml" | "yaml" => "yaml", "xml" => "xml",
        "c" => "c", "cpp" | "cc" | "cxx" => "cpp", "h" => "c", "hpp" => "cpp",
        "go" => "go", "rb" => "ruby", "php" => "php", "swift" => "swift",
        "kt" | "kts" => "kotlin", "scala" => "scala", "dart" => "dart",
        _ => "",
    }
}
