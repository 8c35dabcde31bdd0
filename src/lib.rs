//! # Srccat
//!
//! `srccat` is a library for recursively walking a directory tree, collecting every
//! file with a target extension, and bundling their contents into a single Markdown
//! document annotated with relative paths and fenced code blocks.
//!
//! Traversal prunes a configurable set of directory names (by default the
//! conventional build/output folders `node_modules`, `dist`, `build` and `tests`)
//! at any depth. Files that cannot be read or are not UTF-8 text are skipped with
//! a logged warning; a single bad file never aborts a run. Collection order is
//! deterministic: a directory's own files come before its subdirectories' files,
//! and files within a directory are sorted by name.
//!
//! # Example
//!
//! ```no_run
//! use srccat::{SrccatBuilder, collect, output};
//!
//! let options = SrccatBuilder::new("backend/src")
//!     .extension("ts")
//!     .build();
//!
//! let result = collect(options).expect("failed to scan directory");
//!
//! for file in &result.files {
//!     println!("collected {}", file.path.display());
//! }
//! output::write_markdown(&result, output::DEFAULT_OUTPUT_FILE).expect("failed to write");
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::collect;
pub use error::SrccatError;
pub use options::{DEFAULT_EXCLUDED_DIRS, SrccatBuilder, SrccatOptions};
pub use types::{CollectedFile, SrccatResult};
