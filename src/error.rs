use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SrccatError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("not UTF-8 text: {0}")]
    NonText(PathBuf),
    #[error("walk error: {0}")]
    Walk(String),
}
impl SrccatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SrccatError::Io {
            path: path.into(),
            source,
        }
    }
}
