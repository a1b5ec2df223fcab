// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplerunError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("input source not found: {path}: {source}")]
    InputNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed input source: {path}: {message}")]
    MalformedInput { path: PathBuf, message: String },

    #[error("{failed} of {total} invocations exited non-zero")]
    BatchFailed { failed: usize, total: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TemplerunError>;
