use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read or write the store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid store key: {0}")]
    InvalidKey(String),
}
