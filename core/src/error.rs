use std::path::PathBuf;
use thiserror::Error;

/// Failure of a block-scoped rewrite.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// The target block opened on `line` (1-based) and the input ended before its `};`.
    #[error("class {block} opened on line {line} is never closed")]
    UnterminatedBlock { block: String, line: usize },
}

/// Per-file failure while generating variants or template output.
#[derive(Debug, Error)]
pub enum RvmatError {
    #[error("not a .rvmat file: {}", .0.display())]
    NotRvmat(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("home directory could not be determined")]
    NoHomeDir,
}
