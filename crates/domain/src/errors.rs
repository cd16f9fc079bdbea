use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Stats export failed: {0}")]
    ExportFailed(String),

    #[error("Export sink unavailable: {0}")]
    SinkUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
