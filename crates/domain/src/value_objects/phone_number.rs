//! Recipient phone number value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A recipient phone number reduced to its digits (e.g., 491234567890)
///
/// The Cloud API expects the bare international number without `+`,
/// spaces or punctuation, so everything that is not an ASCII digit is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// Create a new phone number, stripping every non-digit character
    ///
    /// Fails if the input is empty or contains no digits at all.
    pub fn new(number: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = number.as_ref();
        if raw.is_empty() {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone number is required".to_string(),
            ));
        }

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(DomainError::InvalidPhoneNumber(
                "Invalid phone number format".to_string(),
            ));
        }

        Ok(Self { digits })
    }

    /// Get the digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.digits
    }
}
