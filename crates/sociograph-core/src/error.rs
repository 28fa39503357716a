//! Error types for Sociograph.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown import format: '{0}'")]
    UnknownFormat(String),

    #[error("Dump load failed: {0}")]
    DumpLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
