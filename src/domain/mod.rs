//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact ids, blob keys, email addresses, and phone numbers. These value
//! objects validate at construction time and prevent invalid data from
//! being represented anywhere in the system.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod image_id;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use image_id::ImageId;
pub use phone::PhoneNumber;
