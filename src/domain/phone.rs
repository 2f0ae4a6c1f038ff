//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// International phone format: `+` and a 1-3 digit country code, followed by
/// one or more digit groups with optional single space or dash separators.
static INTERNATIONAL_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+\d{1,3}([\s-]?\d+)+$").expect("phone pattern is a valid regex")
});

/// A type-safe wrapper for phone numbers in international format.
///
/// Validated at construction time against the international pattern, so a
/// `PhoneNumber` value is always well-formed.
///
/// # Example
///
/// ```
/// use contact_book_core::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+36 11 345 6789").unwrap();
/// assert_eq!(phone.as_str(), "+36 11 345 6789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the international format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match
    /// `^\+\d{1,3}([\s-]?\d+)+$`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !INTERNATIONAL_PHONE.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
