//! Password strength validation.
//!
//! Requirements vary per form, so the checks live behind a
//! [`PasswordPolicy`] built up the same way other configs in this crate
//! are. The free functions [`validate_password`] and [`password_error`]
//! apply the default policy: at least 8 characters with a digit and a
//! letter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The first requirement a password failed to meet.
///
/// `check` reports requirements in a fixed order (length, digit, letter,
/// uppercase, lowercase, special), so a form shows one actionable
/// message at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password shorter than {min} characters")]
    TooShort { min: usize },
    #[error("password has no digit")]
    MissingDigit,
    #[error("password has no letter")]
    MissingLetter,
    #[error("password has no uppercase letter")]
    MissingUppercase,
    #[error("password has no lowercase letter")]
    MissingLowercase,
    #[error("password has no special character")]
    MissingSpecial,
}

impl PasswordError {
    /// The user-facing message for this error, in Chilean Spanish.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::TooShort { min } => {
                format!("La contraseña debe tener al menos {min} caracteres")
            }
            Self::MissingDigit => "La contraseña debe incluir al menos un número".to_string(),
            Self::MissingLetter => "La contraseña debe incluir al menos una letra".to_string(),
            Self::MissingUppercase => {
                "La contraseña debe incluir al menos una letra mayúscula".to_string()
            }
            Self::MissingLowercase => {
                "La contraseña debe incluir al menos una letra minúscula".to_string()
            }
            Self::MissingSpecial => {
                "La contraseña debe incluir al menos un carácter especial".to_string()
            }
        }
    }
}

/// What a password must contain.
///
/// The default asks for 8+ characters with at least one digit and one
/// letter. Forms with stricter rules chain the builders:
///
/// ```
/// use rut_codec::PasswordPolicy;
///
/// let policy = PasswordPolicy::new()
///     .with_min_length(12)
///     .uppercase()
///     .special();
///
/// assert!(policy.check("Correct.Horse7bat").is_ok());
/// assert!(policy.check("correcthorse7bat").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum length in characters (not bytes).
    pub min_length: usize,

    /// Require at least one ASCII digit.
    pub require_digit: bool,

    /// Require at least one alphabetic character.
    pub require_letter: bool,

    /// Require at least one uppercase letter.
    pub require_uppercase: bool,

    /// Require at least one lowercase letter.
    pub require_lowercase: bool,

    /// Require at least one non-alphanumeric character.
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_digit: true,
            require_letter: true,
            require_uppercase: false,
            require_lowercase: false,
            require_special: false,
        }
    }
}

impl PasswordPolicy {
    /// Create the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum length.
    #[must_use]
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Require an uppercase letter.
    #[must_use]
    pub fn uppercase(mut self) -> Self {
        self.require_uppercase = true;
        self
    }

    /// Require a lowercase letter.
    #[must_use]
    pub fn lowercase(mut self) -> Self {
        self.require_lowercase = true;
        self
    }

    /// Require a non-alphanumeric character.
    #[must_use]
    pub fn special(mut self) -> Self {
        self.require_special = true;
        self
    }

    /// Drop the digit requirement.
    #[must_use]
    pub fn without_digit(mut self) -> Self {
        self.require_digit = false;
        self
    }

    /// Drop the letter requirement.
    #[must_use]
    pub fn without_letter(mut self) -> Self {
        self.require_letter = false;
        self
    }

    /// Check a password against this policy, reporting the first
    /// requirement it misses.
    pub fn check(&self, raw: &str) -> Result<(), PasswordError> {
        if raw.chars().count() < self.min_length {
            return Err(PasswordError::TooShort {
                min: self.min_length,
            });
        }
        if self.require_digit && !raw.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordError::MissingDigit);
        }
        if self.require_letter && !raw.chars().any(char::is_alphabetic) {
            return Err(PasswordError::MissingLetter);
        }
        if self.require_uppercase && !raw.chars().any(char::is_uppercase) {
            return Err(PasswordError::MissingUppercase);
        }
        if self.require_lowercase && !raw.chars().any(char::is_lowercase) {
            return Err(PasswordError::MissingLowercase);
        }
        if self.require_special && raw.chars().all(char::is_alphanumeric) {
            return Err(PasswordError::MissingSpecial);
        }
        Ok(())
    }
}

/// Check a password against the default policy.
#[must_use]
pub fn validate_password(raw: &str) -> bool {
    PasswordPolicy::default().check(raw).is_ok()
}

/// Diagnostic mode for the default policy: `None` when acceptable,
/// otherwise the es-CL message.
#[must_use]
pub fn password_error(raw: &str) -> Option<String> {
    PasswordPolicy::default()
        .check(raw)
        .err()
        .map(|e| e.user_message())
}
