//! Error types for RUT parsing and validation.
//!
//! Every failure is a value; the codec never panics on user input.
//! `Display` renders English diagnostics for logs, while
//! [`RutError::user_message`] returns the Spanish (es-CL) string a form
//! would show the person who typed the value.

use thiserror::Error;

use crate::rut::check_digit::CheckDigit;

/// Why an input failed to parse as a RUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RutError {
    /// The raw input was empty or contained only whitespace.
    #[error("empty input")]
    EmptyInput,

    /// After cleaning, the input does not have the shape of a RUT:
    /// too short, a `K` inside the body, or a body outside 7-8 digits.
    #[error("input does not have the shape of a RUT")]
    InvalidFormat,

    /// The shape is right but the verification character does not match
    /// the one computed from the body.
    #[error("check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        expected: CheckDigit,
        found: CheckDigit,
    },
}

impl RutError {
    /// The user-facing message for this error, in Chilean Spanish.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Debe ingresar un RUT",
            Self::InvalidFormat => "El RUT ingresado no tiene un formato válido",
            Self::CheckDigitMismatch { .. } => "El RUT ingresado no es válido",
        }
    }
}

/// A character that is not a valid verification character.
///
/// Returned by `CheckDigit::try_from(char)`; only `0`-`9`, `K` and `k`
/// convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid check digit character: {0:?} (expected 0-9 or K)")]
pub struct InvalidCheckDigit(pub char);
