//! Picture payload decoding.
//!
//! Inbound pictures arrive as Base64 text, either raw or wrapped in a data
//! URI (`data:image/png;base64,....`). Decoding happens before any storage
//! call, so a malformed payload can never leave a half-stored blob behind.

use crate::error::{ImageError, ImageResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Content type assumed when the payload carries no data-URI prefix.
pub const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// A decoded picture: raw bytes plus the MIME type they were declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Decode a picture payload.
///
/// Accepts either a raw Base64 string or a data-URI-style string of the
/// form `<scheme>:<mime>;<encoding>,<data>`. When a prefix is present the
/// content type is the text between the scheme delimiter (`:`) and the
/// encoding delimiter (`;`); otherwise it defaults to
/// [`DEFAULT_CONTENT_TYPE`]. The segment after the last `,` is decoded with
/// the standard Base64 alphabet.
///
/// # Errors
///
/// Returns [`ImageError::Corrupted`] when the data segment is not valid
/// Base64. This is distinct from validation errors: it signals broken input,
/// not a violated business rule.
pub fn decode_payload(payload: &str) -> ImageResult<DecodedImage> {
    let parts: Vec<&str> = payload.split(',').collect();

    let content_type = if parts.len() > 1 {
        extract_content_type(parts[0])
    } else {
        DEFAULT_CONTENT_TYPE
    };

    // parts is never empty: split always yields at least one element
    let data = parts[parts.len() - 1];

    let bytes = STANDARD.decode(data).map_err(|_| ImageError::Corrupted)?;

    Ok(DecodedImage {
        bytes,
        content_type: content_type.to_string(),
    })
}

/// Pull the MIME type out of a data-URI prefix such as `data:image/jpeg;base64`.
fn extract_content_type(prefix: &str) -> &str {
    let after_scheme = prefix
        .split_once(':')
        .map(|(_, rest)| rest)
        .unwrap_or(prefix);

    after_scheme
        .split_once(';')
        .map(|(mime, _)| mime)
        .unwrap_or(after_scheme)
}
