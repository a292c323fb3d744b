use thiserror::Error;

/// Failures after the command line has been accepted
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not encode the configuration: {0}")]
    Encode(#[from] serde_json::Error),
}
