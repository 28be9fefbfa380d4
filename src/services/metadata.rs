use crate::error::{Result, UploadError};
use crate::utils::mime::content_type_for;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Prefix for keys generated when the caller does not pick one
pub const GENERATED_KEY_PREFIX: &str = "uploads/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub content_type: &'static str,
    pub object_key: String,
}

/// A validated file, fully read into memory and ready to be sent.
#[derive(Debug)]
pub struct PreparedFile {
    pub metadata: FileMetadata,
    pub body: Vec<u8>,
}

/// `uploads/<stem>-<unix millis><.ext>` using the current time.
pub fn generate_key(path: &Path) -> String {
    generate_key_at(path, Utc::now().timestamp_millis())
}

pub fn generate_key_at(path: &Path, unix_millis: i64) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    format!("{}{}-{}{}", GENERATED_KEY_PREFIX, stem, unix_millis, ext)
}

/// The caller's key verbatim, or a generated one when absent or empty.
pub fn resolve_key(path: &Path, custom_key: Option<&str>) -> String {
    match custom_key {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => generate_key(path),
    }
}

/// Validate `path` as a regular file, then read it and work out its metadata.
pub async fn prepare_file(path: &Path, custom_key: Option<&str>) -> Result<PreparedFile> {
    let stat = match fs::metadata(path).await {
        Ok(stat) => stat,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(UploadError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if !stat.is_file() {
        return Err(UploadError::NotAFile(path.to_path_buf()));
    }

    let body = fs::read(path).await?;

    let mut size_bytes = stat.len();
    if body.len() as u64 != size_bytes {
        warn!(
            "⚠️  {} changed while reading ({} -> {} bytes)",
            path.display(),
            size_bytes,
            body.len()
        );
        size_bytes = body.len() as u64;
    }

    let metadata = FileMetadata {
        path: path.to_path_buf(),
        size_bytes,
        content_type: content_type_for(path),
        object_key: resolve_key(path, custom_key),
    };
    debug!(?metadata, "Resolved file metadata");

    Ok(PreparedFile { metadata, body })
}
