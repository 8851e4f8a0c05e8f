//! Email shape validation.
//!
//! This is a form-level shape check, not an RFC 5321 parser: one `@`,
//! a plausible local part, dotted domain labels and an alphabetic TLD.
//! Deliverability is the mail server's problem.

use std::sync::LazyLock;

static EMAIL_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .unwrap()
});

/// Check whether an input looks like an email address.
///
/// Surrounding whitespace is ignored, the way form inputs arrive.
///
/// ```
/// use rut_codec::validate_email;
///
/// assert!(validate_email("ana.perez@example.cl"));
/// assert!(!validate_email("ana.perez@example"));
/// ```
#[must_use]
pub fn validate_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw.trim())
}

/// Diagnostic mode: `None` when valid, otherwise the es-CL message.
#[must_use]
pub fn email_error(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some("Debe ingresar un correo electrónico".to_string());
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Some("El correo electrónico ingresado no es válido".to_string());
    }
    None
}
