//! Shared test mocks.

mod mock_blob_store;
mod mock_contact_repository;

pub use mock_blob_store::MockBlobStore;
pub use mock_contact_repository::MockContactRepository;
