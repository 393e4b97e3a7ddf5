use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("directory scan failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{path}: missing `{label}` line")]
    MissingMetadata { path: PathBuf, label: &'static str },

    #[error("{0}: no movies found")]
    NoMovies(PathBuf),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings error: {0}")]
    Settings(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
