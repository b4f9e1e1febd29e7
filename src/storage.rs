use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use bytes::Bytes;

use crate::error::NotifyError;

/// Read access to the object storage backend holding billing exports.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full content of one object.
    async fn fetch(&self, bucket: &str, name: &str) -> Result<Bytes, NotifyError>;
}

/// S3-backed store used in production.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn fetch(&self, bucket: &str, name: &str) -> Result<Bytes, NotifyError> {
        let object = self
            .client
            .get_object()
            .bucket(bucket)
            .key(name)
            .send()
            .await
            .map_err(|err| {
                NotifyError::Fetch(format!("{bucket}/{name}: {}", DisplayErrorContext(&err)))
            })?;

        let content = object
            .body
            .collect()
            .await
            .map_err(|err| NotifyError::Fetch(format!("{bucket}/{name}: {err}")))?;

        Ok(content.into_bytes())
    }
}
