//! Input cleaning.
//!
//! Form inputs arrive with dots, hyphens, whitespace and the occasional
//! stray character. Cleaning reduces them to the canonical alphabet
//! before anything else looks at them.

/// Strip every character that cannot be part of a RUT.
///
/// Keeps ASCII digits and the verification character `K` (uppercasing a
/// lowercase `k`); drops everything else, including the customary dots
/// and hyphen. Never fails; deciding whether the remainder is a RUT is
/// the validator's job.
///
/// ```
/// use rut_codec::clean_rut;
///
/// assert_eq!(clean_rut("12.345.678-5"), "123456785");
/// assert_eq!(clean_rut(" 7.654.321-k "), "7654321K");
/// assert_eq!(clean_rut("no rut here"), "");
/// ```
#[must_use]
pub fn clean_rut(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            'K' | 'k' => out.push('K'),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_separators() {
        assert_eq!(clean_rut("12.345.678-5"), "123456785");
        assert_eq!(clean_rut("12345678-5"), "123456785");
        assert_eq!(clean_rut("12 345 678 5"), "123456785");
    }

    #[test]
    fn test_clean_uppercases_k() {
        assert_eq!(clean_rut("7654321-k"), "7654321K");
        assert_eq!(clean_rut("7654321-K"), "7654321K");
    }

    #[test]
    fn test_clean_drops_garbage() {
        assert_eq!(clean_rut("rut: 12.345.678-5!"), "123456785");
        assert_eq!(clean_rut("abc"), "");
        assert_eq!(clean_rut(""), "");
        assert_eq!(clean_rut("  \t\n"), "");
    }

    #[test]
    fn test_clean_keeps_k_anywhere() {
        // Cleaning is not validation; a K inside the body survives here
        // and is rejected later by the parser.
        assert_eq!(clean_rut("12K45678-5"), "12K456785");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean_rut("12.345.678-k");
        assert_eq!(clean_rut(&once), once);
    }
}
