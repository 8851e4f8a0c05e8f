//! # rut-codec
//!
//! Validation and formatting for Chilean RUT identifiers and the other
//! inputs a Chilean web form collects: email, phone, password, dates
//! and peso amounts.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every operation is a pure function over its
//!    arguments. No clock, no locale lookup, no I/O, no shared state.
//!
//! 2. **Two Call Modes**: Every validator has a boolean form
//!    (`validate_*`) and a diagnostic form (`*_error`) returning the
//!    es-CL message a form would show. Both run the same pipeline.
//!
//! 3. **Errors Are Values**: Invalid input is an expected outcome, not
//!    an exception. Nothing here panics on user input.
//!
//! ## The RUT Codec
//!
//! A RUT is written `12.345.678-5`: a 7-8 digit body and a Module 11
//! verification character (`0`-`9` or `K`). The codec cleans raw input
//! down to `[0-9K]`, restores the dotted display form, and validates
//! the check digit:
//!
//! ```
//! use rut_codec::{clean_rut, format_rut, validate_rut, rut_error};
//!
//! assert_eq!(clean_rut("12.345.678-5"), "123456785");
//! assert_eq!(format_rut("123456785"), "12.345.678-5");
//! assert!(validate_rut("12.345.678-5"));
//! assert_eq!(rut_error("12345678-9").as_deref(), Some("El RUT ingresado no es válido"));
//! ```
//!
//! ## Modules
//!
//! - `rut`: the RUT codec (cleaning, formatting, check digit, validation)
//! - `validation`: email, phone and password validators
//! - `formatting`: es-CL currency and date formatting
//! - `python`: optional PyO3 bindings (feature `python`)

pub mod formatting;
pub mod rut;
pub mod validation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::rut::{
    clean_rut, format_rut, rut_error, validate_rut,
    CheckDigit, InvalidCheckDigit, Rut, RutError,
};

pub use crate::validation::{
    clean_phone, email_error, format_phone, password_error, phone_error, phone_kind,
    validate_email, validate_password, validate_phone,
    PasswordError, PasswordPolicy, PhoneKind,
};

pub use crate::formatting::{format_clp, format_date, format_date_long, format_miles, parse_date};
