//! Chilean phone number validation and formatting.
//!
//! Since the 2016 numbering unification every national number has 9
//! digits: mobiles start with `9`, landlines with the area digit
//! (`2` for Santiago, `3`-`8` elsewhere). Inputs may carry the `+56`
//! country prefix, spaces, dots, dashes or parentheses.

use serde::{Deserialize, Serialize};

/// Mobile or landline, by leading digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhoneKind {
    /// National number starting with 9.
    Mobile,
    /// National number starting with 2-8.
    Landline,
}

/// Reduce an input to its 9 national digits when possible.
///
/// Strips everything that is not a digit, then drops a leading `56`
/// country code when exactly the 9 national digits remain. Like
/// [`crate::clean_rut`], this never fails; a too-short or too-long
/// result is the validator's concern.
///
/// ```
/// use rut_codec::clean_phone;
///
/// assert_eq!(clean_phone("+56 9 1234 5678"), "912345678");
/// assert_eq!(clean_phone("(2) 2123-4567"), "221234567");
/// ```
#[must_use]
pub fn clean_phone(raw: &str) -> String {
    let mut digits = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        }
    }
    if digits.len() == 11 && digits.starts_with("56") {
        digits.split_off(2)
    } else {
        digits
    }
}

fn is_national(digits: &str) -> bool {
    digits.len() == 9 && digits.as_bytes()[0] >= b'2' && digits.as_bytes()[0] <= b'9'
}

/// Check whether an input is a valid Chilean phone number.
#[must_use]
pub fn validate_phone(raw: &str) -> bool {
    is_national(&clean_phone(raw))
}

/// Classify a phone number by its leading digit, `None` when invalid.
///
/// ```
/// use rut_codec::{phone_kind, PhoneKind};
///
/// assert_eq!(phone_kind("+56 9 1234 5678"), Some(PhoneKind::Mobile));
/// assert_eq!(phone_kind("221234567"), Some(PhoneKind::Landline));
/// assert_eq!(phone_kind("12345"), None);
/// ```
#[must_use]
pub fn phone_kind(raw: &str) -> Option<PhoneKind> {
    let digits = clean_phone(raw);
    if !is_national(&digits) {
        return None;
    }
    if digits.as_bytes()[0] == b'9' {
        Some(PhoneKind::Mobile)
    } else {
        Some(PhoneKind::Landline)
    }
}

/// Diagnostic mode: `None` when valid, otherwise the es-CL message.
#[must_use]
pub fn phone_error(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return Some("Debe ingresar un número de teléfono".to_string());
    }
    if !validate_phone(raw) {
        return Some(
            "El número de teléfono no es válido (se esperan 9 dígitos)".to_string(),
        );
    }
    None
}

/// Render a phone number in the international form, `None` when invalid.
///
/// Mobiles become `+56 9 1234 5678`, landlines `+56 2 2123 4567`: the
/// country code, the leading digit, then the remaining eight in two
/// groups of four.
#[must_use]
pub fn format_phone(raw: &str) -> Option<String> {
    let digits = clean_phone(raw);
    if !is_national(&digits) {
        return None;
    }
    Some(format!(
        "+56 {} {} {}",
        &digits[..1],
        &digits[1..5],
        &digits[5..]
    ))
}
