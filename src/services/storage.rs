use crate::error::{Result, UploadError};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStream;

/// The one object-store operation the uploader needs.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Store `data` under `key` in `bucket`, tagged with `content_type`.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}

pub struct S3StorageService {
    client: Client,
}

impl S3StorageService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(put_object_error)?;
        Ok(())
    }
}

/// Service errors report the store's message; transport and client-side
/// failures report the full SDK error chain.
fn put_object_error(err: SdkError<PutObjectError>) -> UploadError {
    let message = match err.as_service_error().and_then(|e| e.message()) {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(&err).to_string(),
    };
    UploadError::Storage {
        message,
        source: Box::new(err),
    }
}
