//! Contact entity.

use crate::domain::{ContactId, EmailAddress, ImageId, PhoneNumber, ValidationError};
use serde::Serialize;

/// A contact in the contact book.
///
/// The entity is self-validating: `Contact::new` is the single gate, and a
/// value that fails any invariant never exists. Fields are private so no
/// code path can mutate a contact into an invalid state; edits produce a new
/// validated instance that replaces the stored record.
///
/// Serializes to the wire shape `{id, name, phoneNumber, email, imageId}`.
///
/// Note that email/phone uniqueness is not an entity invariant: it spans the
/// whole persisted set and is enforced by the orchestration service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Identifier assigned by the persistence layer; `None` until first save.
    id: Option<ContactId>,

    /// Full name of the contact.
    name: String,

    /// Phone number in international format.
    phone_number: PhoneNumber,

    /// Email address.
    email: EmailAddress,

    /// Key of the stored picture blob, if the contact has one.
    image_id: Option<ImageId>,
}

impl Contact {
    /// Construct a validated contact.
    ///
    /// Fails fast on the first violated invariant; no partially-constructed
    /// value is ever observable.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyName` if `name` is empty or blank.
    /// - `ValidationError::InvalidEmail` if `email` lacks an `@`.
    /// - `ValidationError::InvalidPhone` if `phone_number` is not in
    ///   international format.
    pub fn new(
        id: Option<ContactId>,
        image_id: Option<ImageId>,
        name: impl Into<String>,
        phone_number: &str,
        email: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            id,
            name,
            phone_number: PhoneNumber::new(phone_number)?,
            email: EmailAddress::new(email)?,
            image_id,
        })
    }

    /// Return a copy of this contact with the given id attached.
    ///
    /// Used by persistence adapters when assigning an id on first save.
    pub fn with_id(mut self, id: ContactId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<&ContactId> {
        self.id.as_ref()
    }

    pub fn image_id(&self) -> Option<&ImageId> {
        self.image_id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> Contact {
        Contact::new(None, None, "John Doe", "+36 11 345 6789", "john.doe@uxstudio.com").unwrap()
    }

    #[test]
    fn test_contact_valid_construction() {
        let contact = valid_contact();
        assert_eq!(contact.name(), "John Doe");
        assert_eq!(contact.phone_number().as_str(), "+36 11 345 6789");
        assert_eq!(contact.email().as_str(), "john.doe@uxstudio.com");
        assert!(contact.id().is_none());
        assert!(contact.image_id().is_none());
    }

    #[test]
    fn test_contact_rejects_blank_name() {
        assert_eq!(
            Contact::new(None, None, "", "+36 11 345 6789", "a@b.com"),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            Contact::new(None, None, "   ", "+36 11 345 6789", "a@b.com"),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_contact_rejects_invalid_phone() {
        let result = Contact::new(None, None, "John Doe", "1234812931890", "a@b.com");
        assert!(matches!(result, Err(ValidationError::InvalidPhone(_))));
    }

    #[test]
    fn test_contact_rejects_invalid_email() {
        let result = Contact::new(
            None,
            None,
            "John Doe",
            "+36 11 345 6789",
            "invalid-email-format",
        );
        assert!(matches!(result, Err(ValidationError::InvalidEmail(_))));
    }

    #[test]
    fn test_contact_with_id() {
        let id = ContactId::new("uuid-123").unwrap();
        let contact = valid_contact().with_id(id.clone());
        assert_eq!(contact.id(), Some(&id));
    }

    #[test]
    fn test_contact_serializes_to_wire_shape() {
        let contact = Contact::new(
            Some(ContactId::new("uuid-123").unwrap()),
            Some(ImageId::new("contacts/images/pic.png").unwrap()),
            "John Doe",
            "+36 11 345 6789",
            "john.doe@uxstudio.com",
        )
        .unwrap();

        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "uuid-123",
                "name": "John Doe",
                "phoneNumber": "+36 11 345 6789",
                "email": "john.doe@uxstudio.com",
                "imageId": "contacts/images/pic.png",
            })
        );
    }

    #[test]
    fn test_contact_serializes_missing_fields_as_null() {
        let json = serde_json::to_value(valid_contact()).unwrap();
        assert_eq!(json["id"], serde_json::Value::Null);
        assert_eq!(json["imageId"], serde_json::Value::Null);
    }
}
