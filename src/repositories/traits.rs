use crate::domain::ContactId;
use crate::error::RepositoryResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Port for contact persistence.
///
/// The core depends on this contract only; backends (document store,
/// in-memory map, test mock) implement it elsewhere. Uniqueness of email
/// and phone across the persisted set is ultimately the backend's
/// responsibility (unique indexes); the existence checks here are the
/// service-level fast path.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact. Assigns an id on first save.
    async fn save(&self, contact: Contact) -> RepositoryResult<Contact>;

    /// Replace the stored record at the contact's id.
    async fn edit(&self, contact: Contact) -> RepositoryResult<Contact>;

    /// Remove a contact, returning the removed record.
    ///
    /// Fails with `RepositoryError::NotFound` if the id is unknown. The
    /// returned record lets callers see which picture key, if any, needs
    /// cleanup.
    async fn delete(&self, id: &ContactId) -> RepositoryResult<Contact>;

    /// Fetch a contact by id. Absence is `None`, not an error.
    async fn find_by_id(&self, id: &ContactId) -> RepositoryResult<Option<Contact>>;

    /// Fetch all contacts.
    async fn find_all(&self) -> RepositoryResult<Vec<Contact>>;

    /// Check whether any contact uses the given email.
    async fn exists_by_email(&self, email: &str) -> RepositoryResult<bool>;

    /// Check whether any contact uses the given phone number.
    async fn exists_by_phone_number(&self, phone_number: &str) -> RepositoryResult<bool>;
}

/// Port for picture blob storage.
///
/// Keys are opaque strings generated under the blob key policy; the store
/// never interprets them beyond lookup.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist raw bytes under a fresh generated key and return the key.
    async fn store(&self, bytes: &[u8], content_type: &str) -> RepositoryResult<String>;

    /// Fetch the blob at a key. An unknown key is `None`, not an error.
    async fn load(&self, key: &str) -> RepositoryResult<Option<Vec<u8>>>;

    /// Overwrite the blob at an existing key.
    async fn update(&self, key: &str, bytes: &[u8]) -> RepositoryResult<()>;

    /// Delete the blob at a key. Deleting an unknown key is not an error.
    async fn delete(&self, key: &str) -> RepositoryResult<()>;
}
