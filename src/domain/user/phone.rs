//! Phone number value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum accepted phone number length, including country code.
const MAX_LEN: usize = 35;

/// A normalized phone number, the primary login identifier.
///
/// Stored as digits only; a leading `+` and common separators are
/// stripped during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a phone number from raw user input.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the input is empty, too long, or
    /// contains anything other than digits and separator characters.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, '+' | ' ' | '-' | '(' | ')'))
            .collect();

        if normalized.is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }
        if normalized.len() > MAX_LEN {
            return Err(ValidationError::too_long("phone", MAX_LEN));
        }
        if !normalized.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "phone",
                "must contain only digits",
            ));
        }

        Ok(Self(normalized))
    }

    /// The digits-only representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// E.164-style representation for SMS delivery.
    pub fn to_e164(&self) -> String {
        format!("+{}", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
