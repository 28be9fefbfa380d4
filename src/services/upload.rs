use crate::cli::UploadOptions;
use crate::config::StorageConfig;
use crate::error::{Result, UploadError};
use crate::services::metadata::prepare_file;
use crate::services::storage::StorageService;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadResult {
    pub url: String,
    pub key: String,
    pub bucket: String,
    pub size: u64,
}

/// Join the public prefix and the key, dropping one trailing slash from the prefix.
pub fn public_url(prefix: &str, key: &str) -> String {
    format!("{}/{}", prefix.strip_suffix('/').unwrap_or(prefix), key)
}

/// Validate the file named in `options`, send it with a single put, and report where it lives.
///
/// Store errors are returned as-is; nothing is retried.
pub async fn upload_file(
    options: &UploadOptions,
    config: &StorageConfig,
    store: &dyn StorageService,
) -> Result<UploadResult> {
    let path = options.file_path().ok_or(UploadError::MissingFile)?;

    let prepared = prepare_file(path, options.key.as_deref()).await?;
    let meta = prepared.metadata;

    info!(
        "📤 Uploading {} ({} bytes, {}) to {}/{}",
        meta.path.display(),
        meta.size_bytes,
        meta.content_type,
        config.bucket,
        meta.object_key
    );
    store
        .put_object(
            &config.bucket,
            &meta.object_key,
            prepared.body,
            meta.content_type,
        )
        .await?;
    info!("✅ Uploaded {}", meta.object_key);

    Ok(UploadResult {
        url: public_url(&config.public_url, &meta.object_key),
        key: meta.object_key,
        bucket: config.bucket.clone(),
        size: meta.size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_trims_single_slash() {
        assert_eq!(
            public_url("https://cdn.example.com/", "uploads/a.png"),
            "https://cdn.example.com/uploads/a.png"
        );
        assert_eq!(
            public_url("https://cdn.example.com", "uploads/a.png"),
            "https://cdn.example.com/uploads/a.png"
        );
        assert_eq!(public_url("https://cdn.example.com//", "k"), "https://cdn.example.com//k");
    }

    #[test]
    fn test_result_field_order() {
        let result = UploadResult {
            url: "u".into(),
            key: "k".into(),
            bucket: "b".into(),
            size: 3,
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"url":"u","key":"k","bucket":"b","size":3}"#
        );
    }
}
