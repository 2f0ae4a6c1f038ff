use async_trait::async_trait;
use contact_book_core::domain::ContactId;
use contact_book_core::error::{RepositoryError, RepositoryResult};
use contact_book_core::models::Contact;
use contact_book_core::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the mock with a contact. The contact must carry an id.
    pub fn add_contact(&self, contact: Contact) {
        let id = contact
            .id()
            .expect("seeded contacts must have an id")
            .as_str()
            .to_string();
        self.contacts.lock().unwrap().insert(id, contact);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn save(&self, contact: Contact) -> RepositoryResult<Contact> {
        self.track_call("save");

        let saved = match contact.id() {
            Some(_) => contact,
            None => contact.with_id(ContactId::generate()),
        };
        let id = saved.id().expect("id just assigned").as_str().to_string();
        self.contacts.lock().unwrap().insert(id, saved.clone());
        Ok(saved)
    }

    async fn edit(&self, contact: Contact) -> RepositoryResult<Contact> {
        self.track_call("edit");

        let id = contact
            .id()
            .ok_or_else(|| RepositoryError::NotFound("no id".to_string()))?
            .as_str()
            .to_string();
        let mut contacts = self.contacts.lock().unwrap();
        if !contacts.contains_key(&id) {
            return Err(RepositoryError::NotFound(id));
        }
        contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn delete(&self, id: &ContactId) -> RepositoryResult<Contact> {
        self.track_call("delete");

        self.contacts
            .lock()
            .unwrap()
            .remove(id.as_str())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn find_by_id(&self, id: &ContactId) -> RepositoryResult<Option<Contact>> {
        self.track_call("find_by_id");
        Ok(self.contacts.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Contact>> {
        self.track_call("find_all");
        Ok(self.contacts.lock().unwrap().values().cloned().collect())
    }

    async fn exists_by_email(&self, email: &str) -> RepositoryResult<bool> {
        self.track_call("exists_by_email");
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .values()
            .any(|c| c.email().as_str() == email))
    }

    async fn exists_by_phone_number(&self, phone_number: &str) -> RepositoryResult<bool> {
        self.track_call("exists_by_phone_number");
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .values()
            .any(|c| c.phone_number().as_str() == phone_number))
    }
}
