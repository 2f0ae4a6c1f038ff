//! Image ingestion pipeline: payload decoding and blob key policy.

pub mod key;
pub mod payload;

pub use key::{BlobKeyPolicy, DEFAULT_KEY_PREFIX};
pub use payload::{decode_payload, DecodedImage, DEFAULT_CONTENT_TYPE};
