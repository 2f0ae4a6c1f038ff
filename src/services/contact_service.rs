//! Contact orchestration service.
//!
//! Implements the create/edit/find/delete use cases on top of the
//! persistence port, enforcing email/phone uniqueness across the stored set.
//!
//! NOTE: uniqueness failures carry generic messages on purpose. They must
//! not reveal which record collided.

use crate::domain::ContactId;
use crate::error::{ServiceError, ServiceResult};
use crate::models::Contact;
use crate::observability::Metrics;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Contact use cases exposed to the layer above.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Persist a new contact after checking email/phone uniqueness.
    async fn create(&self, contact: Contact) -> ServiceResult<Contact>;

    /// Replace an existing contact, re-checking uniqueness only for the
    /// fields that changed.
    async fn edit(&self, contact: Contact) -> ServiceResult<Contact>;

    /// Fetch a contact by id.
    async fn find_by_id(&self, id: &ContactId) -> ServiceResult<Contact>;

    /// Fetch all contacts.
    async fn find_all(&self) -> ServiceResult<Vec<Contact>>;

    /// Remove a contact, returning the removed record.
    async fn delete(&self, id: &ContactId) -> ServiceResult<Contact>;
}

/// Default implementation of [`ContactService`].
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    metrics: Metrics,
}

impl ContactServiceImpl {
    pub fn new(repository: Arc<dyn ContactRepository>, metrics: Metrics) -> Self {
        Self {
            repository,
            metrics,
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create(&self, contact: Contact) -> ServiceResult<Contact> {
        // The entity is already validated; both uniqueness lookups touch
        // disjoint keys, so they run concurrently and join before branching.
        let (email_exists, phone_exists) = tokio::join!(
            self.repository.exists_by_email(contact.email().as_str()),
            self.repository
                .exists_by_phone_number(contact.phone_number().as_str()),
        );

        if email_exists? {
            debug!("create rejected: email already in use");
            return Err(ServiceError::EmailTaken);
        }
        if phone_exists? {
            debug!("create rejected: phone number already in use");
            return Err(ServiceError::PhoneNumberTaken);
        }

        let saved = self.repository.save(contact).await?;
        self.metrics.record_contact_created();
        info!(id = %saved.id().map(|i| i.as_str()).unwrap_or("?"), "contact created");
        Ok(saved)
    }

    async fn edit(&self, contact: Contact) -> ServiceResult<Contact> {
        let id = contact.id().ok_or(ServiceError::MissingId)?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        // Unchanged fields never trigger a lookup against themselves; a
        // record trivially "collides" with its own stored values.
        let email_changed = contact.email() != existing.email();
        let phone_changed = contact.phone_number() != existing.phone_number();

        let (email_exists, phone_exists) = tokio::join!(
            async {
                if email_changed {
                    self.repository
                        .exists_by_email(contact.email().as_str())
                        .await
                } else {
                    Ok(false)
                }
            },
            async {
                if phone_changed {
                    self.repository
                        .exists_by_phone_number(contact.phone_number().as_str())
                        .await
                } else {
                    Ok(false)
                }
            },
        );

        if email_exists? {
            debug!("edit rejected: email already in use");
            return Err(ServiceError::EmailTaken);
        }
        if phone_exists? {
            debug!("edit rejected: phone number already in use");
            return Err(ServiceError::PhoneNumberTaken);
        }

        let updated = self.repository.edit(contact).await?;
        self.metrics.record_contact_edited();
        info!(id = %updated.id().map(|i| i.as_str()).unwrap_or("?"), "contact edited");
        Ok(updated)
    }

    async fn find_by_id(&self, id: &ContactId) -> ServiceResult<Contact> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    async fn find_all(&self) -> ServiceResult<Vec<Contact>> {
        Ok(self.repository.find_all().await?)
    }

    async fn delete(&self, id: &ContactId) -> ServiceResult<Contact> {
        let removed = self.repository.delete(id).await?;
        self.metrics.record_contact_deleted();
        info!(id = %id, "contact deleted");
        Ok(removed)
    }
}
