use std::path::PathBuf;

use thiserror::Error;

/// Failures of the on-disk layers (grid sites store, settings).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("path has no parent directory: {0:?}")]
    NoParent(PathBuf),
}
