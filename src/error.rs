//! Error types for the contact-book core.
//!
//! This module defines the crate error taxonomy using `thiserror`. Four
//! kinds are kept deliberately distinct at the boundary:
//!
//! - format invariant violations ([`crate::domain::ValidationError`]),
//! - uniqueness violations and not-found outcomes ([`ServiceError`]),
//! - malformed picture payloads ([`ImageError::Corrupted`]),
//! - storage backend failures ([`RepositoryError`]).
//!
//! Blob cleanup failures are the one class absorbed inside the core; they
//! never surface as errors (see `ImageService::delete_image`).

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by the storage ports.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The requested record or blob does not exist.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors produced by the image pipeline.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The payload could not be decoded. This signals a transport/data
    /// problem, not a business-rule violation.
    #[error("The provided image data is corrupted or formatted incorrectly")]
    Corrupted,

    /// The blob store failed.
    #[error("blob storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for ImageError {
    fn from(err: RepositoryError) -> Self {
        ImageError::Storage(err.to_string())
    }
}

/// Errors surfaced by the orchestration services.
///
/// Uniqueness variants carry generic messages on purpose: they must not
/// reveal which stored record collided.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A format invariant failed during entity construction.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another contact already uses this email.
    #[error("The given email is invalid")]
    EmailTaken,

    /// Another contact already uses this phone number.
    #[error("The given phone number is invalid")]
    PhoneNumberTaken,

    /// No contact exists under the requested id.
    #[error("Couldn't find the contact")]
    NotFound,

    /// Edit was attempted on a contact that has never been persisted.
    #[error("Can't edit a contact that has no id")]
    MissingId,

    /// The picture payload could not be processed.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => ServiceError::NotFound,
            RepositoryError::Backend(reason) => ServiceError::Backend(reason),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ImageError
pub type ImageResult<T> = Result<T, ImageError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
