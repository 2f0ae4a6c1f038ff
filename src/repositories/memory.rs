//! In-memory port adapters.
//!
//! Default backends for tests and embedders that don't bring their own
//! storage. Both adapters keep a `HashMap` behind a mutex; the lock is held
//! for the duration of a single operation only, never across an await.

use crate::domain::ContactId;
use crate::error::{RepositoryError, RepositoryResult};
use crate::image::BlobKeyPolicy;
use crate::models::Contact;
use crate::repositories::traits::{BlobStore, ContactRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory implementation of [`ContactRepository`].
///
/// Assigns a uuid-v4 id on first save, mirroring how a document store's
/// driver would fill in the id field.
#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, HashMap<String, Contact>>> {
        self.contacts
            .lock()
            .map_err(|_| RepositoryError::Backend("contact store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn save(&self, contact: Contact) -> RepositoryResult<Contact> {
        let saved = match contact.id() {
            Some(_) => contact,
            None => contact.with_id(ContactId::generate()),
        };

        let mut contacts = self.lock()?;
        // id is always present here: either carried in or just generated
        if let Some(id) = saved.id() {
            contacts.insert(id.as_str().to_string(), saved.clone());
        }
        Ok(saved)
    }

    async fn edit(&self, contact: Contact) -> RepositoryResult<Contact> {
        let id = contact
            .id()
            .ok_or_else(|| RepositoryError::NotFound("contact without id".to_string()))?
            .as_str()
            .to_string();

        let mut contacts = self.lock()?;
        if !contacts.contains_key(&id) {
            return Err(RepositoryError::NotFound(id));
        }
        contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn delete(&self, id: &ContactId) -> RepositoryResult<Contact> {
        let mut contacts = self.lock()?;
        contacts
            .remove(id.as_str())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn find_by_id(&self, id: &ContactId) -> RepositoryResult<Option<Contact>> {
        let contacts = self.lock()?;
        Ok(contacts.get(id.as_str()).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Contact>> {
        let contacts = self.lock()?;
        Ok(contacts.values().cloned().collect())
    }

    async fn exists_by_email(&self, email: &str) -> RepositoryResult<bool> {
        let contacts = self.lock()?;
        Ok(contacts.values().any(|c| c.email().as_str() == email))
    }

    async fn exists_by_phone_number(&self, phone_number: &str) -> RepositoryResult<bool> {
        let contacts = self.lock()?;
        Ok(contacts
            .values()
            .any(|c| c.phone_number().as_str() == phone_number))
    }
}

/// In-memory implementation of [`BlobStore`].
///
/// Stores bytes and content type per key; keys come from the shared
/// [`BlobKeyPolicy`], so they have the same shape an object-store backend
/// would produce.
#[derive(Clone)]
pub struct InMemoryBlobStore {
    blobs: Arc<Mutex<HashMap<String, (Vec<u8>, String)>>>,
    keys: BlobKeyPolicy,
}

impl InMemoryBlobStore {
    pub fn new(keys: BlobKeyPolicy) -> Self {
        Self {
            blobs: Arc::new(Mutex::new(HashMap::new())),
            keys,
        }
    }

    fn lock(
        &self,
    ) -> RepositoryResult<std::sync::MutexGuard<'_, HashMap<String, (Vec<u8>, String)>>> {
        self.blobs
            .lock()
            .map_err(|_| RepositoryError::Backend("blob store lock poisoned".to_string()))
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new(BlobKeyPolicy::default())
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn store(&self, bytes: &[u8], content_type: &str) -> RepositoryResult<String> {
        let key = self.keys.generate(content_type);
        let mut blobs = self.lock()?;
        blobs.insert(key.clone(), (bytes.to_vec(), content_type.to_string()));
        Ok(key)
    }

    async fn load(&self, key: &str) -> RepositoryResult<Option<Vec<u8>>> {
        let blobs = self.lock()?;
        Ok(blobs.get(key).map(|(bytes, _)| bytes.clone()))
    }

    async fn update(&self, key: &str, bytes: &[u8]) -> RepositoryResult<()> {
        let mut blobs = self.lock()?;
        match blobs.get_mut(key) {
            Some(entry) => {
                entry.0 = bytes.to_vec();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(key.to_string())),
        }
    }

    async fn delete(&self, key: &str) -> RepositoryResult<()> {
        let mut blobs = self.lock()?;
        // Object-store semantics: deleting a missing key succeeds
        blobs.remove(key);
        Ok(())
    }
}
