//! Image service: decode-and-store lifecycle around the blob port.

use crate::domain::ImageId;
use crate::error::{ImageError, ImageResult};
use crate::image::decode_payload;
use crate::observability::Metrics;
use crate::repositories::BlobStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Image use cases: the bridge between Base64 payloads at the boundary and
/// raw bytes in the blob store.
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Decode a payload and store it; returns the generated blob key.
    async fn create_image(&self, payload: &str) -> ImageResult<ImageId>;

    /// Fetch the raw bytes of a stored picture. Unknown keys are `None`.
    async fn get_image(&self, id: &ImageId) -> ImageResult<Option<Vec<u8>>>;

    /// Decode a payload and overwrite the blob at an existing key.
    async fn update_image(&self, id: &ImageId, payload: &str) -> ImageResult<()>;

    /// Delete a stored picture.
    ///
    /// Best-effort: blob-store failures are logged and counted but never
    /// propagated, so callers running cleanup can't be failed by it.
    /// Deleting an unknown key is a no-op.
    async fn delete_image(&self, id: &ImageId);
}

/// Default implementation of [`ImageService`].
pub struct ImageServiceImpl {
    blobs: Arc<dyn BlobStore>,
    metrics: Metrics,
}

impl ImageServiceImpl {
    pub fn new(blobs: Arc<dyn BlobStore>, metrics: Metrics) -> Self {
        Self { blobs, metrics }
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    async fn create_image(&self, payload: &str) -> ImageResult<ImageId> {
        // Decode fails before any storage call, so a corrupted payload
        // never leaves a blob behind.
        let decoded = decode_payload(payload)?;

        let key = self
            .blobs
            .store(&decoded.bytes, &decoded.content_type)
            .await?;

        let id = ImageId::new(key)
            .map_err(|_| ImageError::Storage("blob store returned an empty key".to_string()))?;

        self.metrics.record_image_stored();
        debug!(image_id = %id, content_type = %decoded.content_type, "picture stored");
        Ok(id)
    }

    async fn get_image(&self, id: &ImageId) -> ImageResult<Option<Vec<u8>>> {
        Ok(self.blobs.load(id.as_str()).await?)
    }

    async fn update_image(&self, id: &ImageId, payload: &str) -> ImageResult<()> {
        let decoded = decode_payload(payload)?;
        self.blobs.update(id.as_str(), &decoded.bytes).await?;
        debug!(image_id = %id, "picture replaced");
        Ok(())
    }

    async fn delete_image(&self, id: &ImageId) {
        match self.blobs.delete(id.as_str()).await {
            Ok(()) => debug!(image_id = %id, "picture deleted"),
            Err(err) => {
                self.metrics.record_cleanup_failure();
                warn!(image_id = %id, error = %err, "failed to delete picture blob, continuing");
            }
        }
    }
}
