use storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Persistence failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Snapshot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
