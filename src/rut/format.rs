//! Display formatting.
//!
//! Chileans write RUTs with dots grouping the body and a hyphen before
//! the verification character: `12.345.678-5`. The formatter restores
//! that shape from whatever the user typed.

use crate::rut::normalize::clean_rut;

/// Insert a `.` every three characters, counting from the right.
///
/// Shared by the RUT formatter and the currency/count formatters; the
/// input is expected to be ASCII.
pub(crate) fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(b as char);
    }
    out
}

/// Format a raw input in the customary dotted shape.
///
/// The input is cleaned first, so `"123456785"`, `"12345678-5"` and
/// `"12.345.678-5"` all format identically. A cleaned input of one
/// character or less is returned as-is; there is nothing to split into
/// body and check digit yet, and partial input while the user types is
/// not an error.
///
/// Formatting is not validation: the output shape says nothing about
/// whether the check digit is right. Use [`crate::validate_rut`] or
/// [`crate::Rut::parse`] for that.
///
/// ```
/// use rut_codec::format_rut;
///
/// assert_eq!(format_rut("123456785"), "12.345.678-5");
/// assert_eq!(format_rut("7654321k"), "7.654.321-K");
/// assert_eq!(format_rut("5"), "5");
/// ```
#[must_use]
pub fn format_rut(raw: &str) -> String {
    let cleaned = clean_rut(raw);
    if cleaned.len() <= 1 {
        return cleaned;
    }
    let (body, check) = cleaned.split_at(cleaned.len() - 1);
    format!("{}-{}", group_thousands(body), check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("1234567"), "1.234.567");
        assert_eq!(group_thousands("12345678"), "12.345.678");
    }

    #[test]
    fn test_format_eight_digit_body() {
        assert_eq!(format_rut("123456785"), "12.345.678-5");
        assert_eq!(format_rut("12345678-5"), "12.345.678-5");
        assert_eq!(format_rut("12.345.678-5"), "12.345.678-5");
    }

    #[test]
    fn test_format_seven_digit_body() {
        assert_eq!(format_rut("12345674"), "1.234.567-4");
    }

    #[test]
    fn test_format_uppercases_k() {
        assert_eq!(format_rut("11111112-k"), "11.111.112-K");
    }

    #[test]
    fn test_format_short_inputs() {
        assert_eq!(format_rut(""), "");
        assert_eq!(format_rut("5"), "5");
        assert_eq!(format_rut("k"), "K");
        // Two characters is already a body plus check digit.
        assert_eq!(format_rut("19"), "1-9");
    }

    #[test]
    fn test_format_ignores_garbage() {
        assert_eq!(format_rut("rut 12.345.678-5 ok"), "12.345.678-5");
        assert_eq!(format_rut("---"), "");
    }

    #[test]
    fn test_format_does_not_validate() {
        // Wrong check digit still formats; only the validator rejects it.
        assert_eq!(format_rut("12345678-0"), "12.345.678-0");
    }
}
