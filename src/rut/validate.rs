//! RUT parsing and validation.
//!
//! The typed entry point is [`Rut::parse`]; the boolean and diagnostic
//! call modes ([`validate_rut`], [`rut_error`]) are thin wrappers over
//! it. Parsing runs the full pipeline:
//!
//! 1. Empty or whitespace-only input is rejected outright.
//! 2. The input is cleaned down to `[0-9K]`.
//! 3. The last character splits off as the verification character; the
//!    body before it must be 7 or 8 digits (the issued range, roughly
//!    1.000.000 through 99.999.999).
//! 4. The Module 11 digit is computed over the body and compared with
//!    the one supplied, case-insensitively on `K`.
//!
//! ## Usage
//!
//! ```
//! use rut_codec::{validate_rut, Rut};
//!
//! assert!(validate_rut("12.345.678-5"));
//! assert!(!validate_rut("12.345.678-9"));
//!
//! let rut = Rut::parse("12345678-5").unwrap();
//! assert_eq!(rut.number(), 12_345_678);
//! assert_eq!(rut.to_string(), "12.345.678-5");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::rut::check_digit::CheckDigit;
use crate::rut::error::RutError;
use crate::rut::format::group_thousands;
use crate::rut::normalize::clean_rut;

/// A validated RUT: body digits plus matching verification character.
///
/// A value of this type always upholds the parse invariants; there is no
/// way to construct one with a wrong check digit. `Display` renders the
/// customary dotted form, [`Rut::compact`] the undotted wire form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rut {
    /// Digit values (0-9), most significant first. 7 or 8 entries, so
    /// the inline capacity always suffices.
    body: SmallVec<[u8; 8]>,
    check_digit: CheckDigit,
}

impl Rut {
    /// Smallest body number the validator accepts (7 digits).
    pub const MIN_NUMBER: u32 = 1_000_000;

    /// Largest body number the validator accepts (8 digits).
    pub const MAX_NUMBER: u32 = 99_999_999;

    /// Parse and validate a raw input.
    ///
    /// Accepts any written form that cleans down to a valid RUT:
    /// `"12345678-5"`, `"12.345.678-5"`, `"123456785"`, stray spaces and
    /// a lowercase `k` included.
    pub fn parse(raw: &str) -> Result<Self, RutError> {
        if raw.trim().is_empty() {
            return Err(RutError::EmptyInput);
        }
        let cleaned = clean_rut(raw);
        if cleaned.len() < 2 {
            return Err(RutError::InvalidFormat);
        }

        let bytes = cleaned.as_bytes();
        let (body_bytes, check) = bytes.split_at(bytes.len() - 1);
        let found = CheckDigit::from_ascii(check[0]).ok_or(RutError::InvalidFormat)?;

        // Issued RUTs have 7 or 8 digit bodies.
        if body_bytes.len() < 7 || body_bytes.len() > 8 {
            return Err(RutError::InvalidFormat);
        }

        let mut body: SmallVec<[u8; 8]> = SmallVec::with_capacity(body_bytes.len());
        for &b in body_bytes {
            if !b.is_ascii_digit() {
                return Err(RutError::InvalidFormat);
            }
            body.push(b - b'0');
        }

        let expected = CheckDigit::compute(&body);
        if expected != found {
            return Err(RutError::CheckDigitMismatch { expected, found });
        }

        Ok(Self {
            body,
            check_digit: found,
        })
    }

    /// Build a RUT from its body number, computing the check digit.
    ///
    /// Fails with `InvalidFormat` outside
    /// [`MIN_NUMBER`](Self::MIN_NUMBER)..=[`MAX_NUMBER`](Self::MAX_NUMBER).
    ///
    /// ```
    /// use rut_codec::Rut;
    ///
    /// let rut = Rut::from_number(12_345_678).unwrap();
    /// assert_eq!(rut.to_string(), "12.345.678-5");
    /// assert!(Rut::from_number(999).is_err());
    /// ```
    pub fn from_number(number: u32) -> Result<Self, RutError> {
        if number < Self::MIN_NUMBER || number > Self::MAX_NUMBER {
            return Err(RutError::InvalidFormat);
        }
        let mut body: SmallVec<[u8; 8]> = SmallVec::new();
        let mut n = number;
        while n > 0 {
            body.push((n % 10) as u8);
            n /= 10;
        }
        body.reverse();
        let check_digit = CheckDigit::compute(&body);
        Ok(Self { body, check_digit })
    }

    /// The body as a number. Leading zeros in the written form (an
    /// 8-digit body starting with `0`) do not survive this view.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.body.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d))
    }

    /// The body digit values (0-9), most significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.body
    }

    /// The verification character.
    #[must_use]
    pub const fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    /// The undotted canonical form, `12345678-5`. This is what a value
    /// serializes as.
    #[must_use]
    pub fn compact(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 2);
        for &d in &self.body {
            out.push((b'0' + d) as char);
        }
        out.push('-');
        out.push(self.check_digit.to_char());
        out
    }
}

impl std::str::FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut body = String::with_capacity(self.body.len());
        for &d in &self.body {
            body.push((b'0' + d) as char);
        }
        write!(f, "{}-{}", group_thousands(&body), self.check_digit)
    }
}

// A RUT crosses JSON as its compact string; deserializing re-runs the
// whole parse so a decoded value is as trustworthy as a parsed one.
impl Serialize for Rut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.compact())
    }
}

impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Boolean call mode: is this input a valid RUT?
///
/// The caller loses the reason; use [`rut_error`] or [`Rut::parse`] when
/// the reason matters.
#[must_use]
pub fn validate_rut(raw: &str) -> bool {
    Rut::parse(raw).is_ok()
}

/// Diagnostic call mode: `None` when valid, otherwise the es-CL message
/// a form would show.
///
/// ```
/// use rut_codec::rut_error;
///
/// assert_eq!(rut_error("11111111-1"), None);
/// assert_eq!(rut_error(""), Some("Debe ingresar un RUT".to_string()));
/// ```
#[must_use]
pub fn rut_error(raw: &str) -> Option<String> {
    match Rut::parse(raw) {
        Ok(_) => None,
        Err(err) => Some(err.user_message().to_string()),
    }
}
