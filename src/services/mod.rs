//! Application service layer.
//!
//! Services contain the business logic and orchestrate the ports. The
//! `ContactBook` facade is the surface a transport adapter consumes; the
//! `ContactService`/`ImageService` traits underneath keep the two
//! lifecycles independently testable.

mod contact_book;
mod contact_service;
mod image_service;

pub use contact_book::{ContactBook, ContactUpdate, NewContact};
pub use contact_service::{ContactService, ContactServiceImpl};
pub use image_service::{ImageService, ImageServiceImpl};
