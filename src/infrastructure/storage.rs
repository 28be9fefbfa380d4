use crate::config::StorageConfig;
use crate::services::storage::S3StorageService;
use aws_sdk_s3::config::{Credentials, Region};
use std::sync::Arc;
use tracing::info;

/// R2 ignores the region, but the SDK insists on one
const REGION: &str = "auto";

/// Build an S3 client for the configured endpoint. Makes no network calls.
pub async fn setup_storage(config: &StorageConfig) -> Arc<S3StorageService> {
    info!("☁️  S3 Storage: {} (Bucket: {})", config.endpoint, config.bucket);

    let aws_config = aws_config::from_env()
        .endpoint_url(&config.endpoint)
        .region(Region::new(REGION))
        .credentials_provider(Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "static",
        ))
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(true)
        .build();

    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);
    Arc::new(S3StorageService::new(s3_client))
}
