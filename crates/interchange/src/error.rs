use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterchangeError {
    #[error("Failed to read or write the CSV file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing failed: {0}")]
    Csv(#[from] csv::Error),
}
