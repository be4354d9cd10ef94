use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read roster from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write roster to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// True when the backing file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::Read { source, .. } => source.kind() == io::ErrorKind::NotFound,
            StoreError::Write { .. } => false,
        }
    }
}
