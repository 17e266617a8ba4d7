//! One-time SMS confirmation token.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Number of digits in a confirmation code.
const TOKEN_LEN: usize = 6;

/// Six-digit one-time code sent by SMS during registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationToken(String);

impl ConfirmationToken {
    /// Generates a random six-digit token.
    ///
    /// Uniqueness across pending registrations is the caller's concern;
    /// the registration handler retries until the repository reports the
    /// token unused.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let digits: String = (0..TOKEN_LEN)
            .map(|_| char::from(b'0' + rng.gen_range(0..10)))
            .collect();
        Self(digits)
    }

    /// Parses a stored or user-supplied token.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the input is exactly six ASCII
    /// digits.
    pub fn parse(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        if s.len() != TOKEN_LEN || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "confirmation_token",
                "must be exactly six digits",
            ));
        }
        Ok(Self(s))
    }

    /// The digits of the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-length comparison against a user-supplied code.
    pub fn matches(&self, code: &str) -> bool {
        self.0 == code
    }
}

impl fmt::Display for ConfirmationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
