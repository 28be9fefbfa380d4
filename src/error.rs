use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("--file is required")]
    MissingFile,

    #[error("{0} not set")]
    MissingVar(&'static str),

    #[error("R2_BUCKET not set (use --bucket or set R2_BUCKET)")]
    MissingBucket,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the object store. `message` is the service's own
    /// text when it sent one; `source` keeps the original error.
    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, UploadError>;
