//! Error types for binder operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or assembling a book.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("missing YAML document: {0}")]
    MissingDocument(&'static str),

    #[error("scene file not found: {}", .0.display())]
    SceneNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
