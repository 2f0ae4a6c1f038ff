//! Storage ports and default adapters.

pub mod memory;
pub mod traits;

pub use memory::{InMemoryBlobStore, InMemoryContactRepository};
pub use traits::{BlobStore, ContactRepository};
