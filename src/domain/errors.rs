//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object and entity validation.
///
/// Messages are user-safe: they name the violated rule without exposing
/// anything about stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The contact name is empty or blank.
    EmptyName,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::EmptyName => write!(f, "Contact name can't be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid telephone number: {}. Use the international format (e.g. +36 11 345 6789)",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
