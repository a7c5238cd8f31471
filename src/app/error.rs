use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Connectivity check failed: {0}")]
    Check(#[from] crate::connectivity::CheckError),
    #[error("Witness path failed verification: {0}")]
    Path(#[from] crate::numbers::PathViolation),
}
