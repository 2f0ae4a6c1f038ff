//! Contact book facade.
//!
//! The surface exposed upward (to an HTTP adapter or embedder). It couples
//! the contact lifecycle to the picture lifecycle: pictures are stored
//! before the contact that references them, replaced new-first on edit, and
//! cleaned up best-effort on delete.

use crate::domain::{ContactId, ImageId};
use crate::error::ServiceResult;
use crate::models::Contact;
use crate::services::{ContactService, ImageService};
use std::sync::Arc;
use tracing::debug;

/// Request shape for creating a contact.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    /// Base64 picture payload, raw or data-URI.
    pub image_payload: Option<String>,
}

/// Request shape for editing a contact.
///
/// Partial-update semantics: `None` means "keep the stored value", never
/// "clear the field". Presence of a field is tracked separately from
/// emptiness on purpose.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// New picture payload; replaces the stored blob when present.
    pub image_payload: Option<String>,
}

/// High-level contact book operations.
pub struct ContactBook {
    contacts: Arc<dyn ContactService>,
    images: Arc<dyn ImageService>,
}

impl ContactBook {
    pub fn new(contacts: Arc<dyn ContactService>, images: Arc<dyn ImageService>) -> Self {
        Self { contacts, images }
    }

    /// Create a contact, storing its picture first when one is supplied.
    pub async fn create(&self, request: NewContact) -> ServiceResult<Contact> {
        let image_id = match &request.image_payload {
            Some(payload) => Some(self.images.create_image(payload).await?),
            None => None,
        };

        let contact = Contact::new(
            None,
            image_id,
            request.name,
            &request.phone_number,
            &request.email,
        )?;

        self.contacts.create(contact).await
    }

    /// Edit a contact with partial-update semantics.
    ///
    /// A new picture payload stores the replacement blob first and removes
    /// the old key only afterwards. The two steps are not atomic: a crash
    /// in between orphans the old blob, which is an accepted risk.
    pub async fn edit(&self, id: &ContactId, update: ContactUpdate) -> ServiceResult<Contact> {
        let existing = self.contacts.find_by_id(id).await?;

        let image_id = match &update.image_payload {
            Some(payload) => {
                let new_id = self.images.create_image(payload).await?;
                if let Some(old_id) = existing.image_id() {
                    debug!(old = %old_id, new = %new_id, "replacing contact picture");
                    self.images.delete_image(old_id).await;
                }
                Some(new_id)
            }
            None => existing.image_id().cloned(),
        };

        let candidate = Contact::new(
            Some(id.clone()),
            image_id,
            update.name.unwrap_or_else(|| existing.name().to_string()),
            update
                .phone_number
                .as_deref()
                .unwrap_or(existing.phone_number().as_str()),
            update
                .email
                .as_deref()
                .unwrap_or(existing.email().as_str()),
        )?;

        self.contacts.edit(candidate).await
    }

    /// Delete a contact and clean up its picture blob.
    ///
    /// The record is removed first; blob cleanup is best-effort and never
    /// fails the delete.
    pub async fn delete(&self, id: &ContactId) -> ServiceResult<Contact> {
        let removed = self.contacts.delete(id).await?;

        if let Some(image_id) = removed.image_id() {
            self.images.delete_image(image_id).await;
        }

        Ok(removed)
    }

    /// Fetch a single contact.
    pub async fn find_by_id(&self, id: &ContactId) -> ServiceResult<Contact> {
        self.contacts.find_by_id(id).await
    }

    /// Fetch all contacts.
    pub async fn find_all(&self) -> ServiceResult<Vec<Contact>> {
        self.contacts.find_all().await
    }

    /// Fetch a stored picture's bytes; `None` when the key is unknown.
    pub async fn get_picture(&self, image_id: &ImageId) -> ServiceResult<Option<Vec<u8>>> {
        Ok(self.images.get_image(image_id).await?)
    }
}
