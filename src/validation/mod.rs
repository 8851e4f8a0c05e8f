//! Validators for the non-RUT form inputs: email, phone, password.
//!
//! Each follows the codec's two call modes: a boolean `validate_*` and a
//! diagnostic `*_error` returning the es-CL message a form would show.

pub mod email;
pub mod password;
pub mod phone;

pub use email::{email_error, validate_email};
pub use password::{password_error, validate_password, PasswordError, PasswordPolicy};
pub use phone::{
    clean_phone, format_phone, phone_error, phone_kind, validate_phone, PhoneKind,
};
