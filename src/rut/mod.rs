//! The RUT codec: cleaning, formatting, check digit computation and
//! validation for Chilean tax identifiers.
//!
//! The written form is `12.345.678-5`: a 7-8 digit body, dot-grouped,
//! with a Module 11 verification character (`0`-`9` or `K`) after the
//! hyphen. All operations here are pure functions over short strings;
//! nothing touches a clock, the network or shared state.

pub mod check_digit;
pub mod error;
pub mod format;
pub mod normalize;
pub mod validate;

pub use check_digit::CheckDigit;
pub use error::{InvalidCheckDigit, RutError};
pub use format::format_rut;
pub use normalize::clean_rut;
pub use validate::{rut_error, validate_rut, Rut};
