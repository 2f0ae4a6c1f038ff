//! Blob key policy.
//!
//! Stored pictures live under `<prefix>/<uuid>.<extension>`, where the
//! extension is the MIME subtype (`image/jpeg` -> `.jpeg`). The key is the
//! only coupling between a contact record and its picture blob, so the
//! format is owned here and shared by every blob-store backend.

use uuid::Uuid;

/// Default namespace prefix for picture blobs.
pub const DEFAULT_KEY_PREFIX: &str = "contacts/images";

/// Generates globally unique blob keys under a fixed namespace prefix.
#[derive(Debug, Clone)]
pub struct BlobKeyPolicy {
    prefix: String,
}

impl BlobKeyPolicy {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Generate a fresh key for a blob of the given content type.
    pub fn generate(&self, content_type: &str) -> String {
        let extension = content_type
            .split_once('/')
            .map(|(_, subtype)| subtype)
            .unwrap_or(content_type);

        format!("{}/{}.{}", self.prefix, Uuid::new_v4(), extension)
    }
}

impl Default for BlobKeyPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}
