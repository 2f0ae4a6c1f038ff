//! Contact Book Core - validation and orchestration layer for a contact-book service.
//!
//! Clients submit a name, phone number, email, and optional Base64 picture;
//! this crate enforces the format and uniqueness invariants, persists the
//! contact through a storage port, and keeps the picture blob's lifecycle
//! coupled to the contact record. Transport, real database drivers, and UI
//! live in adapter crates built on the ports defined here.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (ids, email, phone)
//! - **models**: the self-validating `Contact` entity
//! - **error**: crate error taxonomy
//! - **config**: configuration from environment variables
//! - **repositories**: storage port contracts plus in-memory adapters
//! - **image**: picture payload decoding and blob key policy
//! - **services**: contact/image orchestration and the `ContactBook` facade
//! - **observability**: metrics counters and tracing setup

pub mod config;
pub mod domain;
pub mod error;
pub mod image;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ContactId, EmailAddress, ImageId, PhoneNumber, ValidationError};
pub use error::{ConfigError, ImageError, RepositoryError, ServiceError};
pub use models::Contact;
pub use observability::Metrics;
pub use repositories::{BlobStore, ContactRepository, InMemoryBlobStore, InMemoryContactRepository};
pub use services::{
    ContactBook, ContactService, ContactServiceImpl, ContactUpdate, ImageService,
    ImageServiceImpl, NewContact,
};
