//! Email, phone and password validator integration tests.
//!
//! Each validator is exercised through both call modes the way a form
//! handler would use them.

use rut_codec::{
    clean_phone, email_error, format_phone, password_error, phone_error, phone_kind,
    validate_email, validate_password, validate_phone, PasswordError, PasswordPolicy,
    PhoneKind,
};

// =============================================================================
// Email Tests
// =============================================================================

/// Test the shapes a signup form actually receives.
#[test]
fn test_email_accepts_realistic_addresses() {
    let valid = [
        "ana@example.cl",
        "ana.perez@example.com",
        "a.perez+compras@sub.dominio.cl",
        "ANA@EXAMPLE.CL",
        " ana@example.cl ",
    ];
    for addr in valid {
        assert!(validate_email(addr), "rejected {addr:?}");
        assert_eq!(email_error(addr), None, "errored on {addr:?}");
    }
}

/// Test rejection of malformed addresses.
#[test]
fn test_email_rejects_malformed() {
    let invalid = [
        "",
        "   ",
        "ana",
        "ana@",
        "@example.cl",
        "ana@example",
        "ana example@example.cl",
        "ana@ejemplo .cl",
    ];
    for addr in invalid {
        assert!(!validate_email(addr), "accepted {addr:?}");
        assert!(email_error(addr).is_some(), "no message for {addr:?}");
    }
}

/// Test that the empty case gets its own message.
#[test]
fn test_email_messages() {
    assert_eq!(
        email_error(""),
        Some("Debe ingresar un correo electrónico".to_string())
    );
    assert_eq!(
        email_error("ana@example"),
        Some("El correo electrónico ingresado no es válido".to_string())
    );
}

// =============================================================================
// Phone Tests
// =============================================================================

/// Test cleaning against the ways people write their numbers.
#[test]
fn test_phone_clean_written_forms() {
    assert_eq!(clean_phone("+56 9 1234 5678"), "912345678");
    assert_eq!(clean_phone("56912345678"), "912345678");
    assert_eq!(clean_phone("9-1234-5678"), "912345678");
    assert_eq!(clean_phone("(2) 2123 4567"), "221234567");
    assert_eq!(clean_phone("912345678"), "912345678");
}

/// Test validation and classification of mobiles and landlines.
#[test]
fn test_phone_validation_and_kind() {
    assert!(validate_phone("+56 9 8765 4321"));
    assert_eq!(phone_kind("+56 9 8765 4321"), Some(PhoneKind::Mobile));

    assert!(validate_phone("22 123 4567"));
    assert_eq!(phone_kind("22 123 4567"), Some(PhoneKind::Landline));

    assert!(!validate_phone("12345678"));
    assert!(!validate_phone("112345678"));
    assert_eq!(phone_kind("12345678"), None);
}

/// Test the international display form.
#[test]
fn test_phone_formatting() {
    assert_eq!(
        format_phone("912345678"),
        Some("+56 9 1234 5678".to_string())
    );
    assert_eq!(
        format_phone("+56 2 2123 4567"),
        Some("+56 2 2123 4567".to_string())
    );
    assert_eq!(format_phone("911"), None);
}

/// Test the two phone call modes agree.
#[test]
fn test_phone_call_modes_agree() {
    let inputs = ["912345678", "+56912345678", "", "123", "012345678"];
    for raw in inputs {
        assert_eq!(
            validate_phone(raw),
            phone_error(raw).is_none(),
            "disagreement on {raw:?}"
        );
    }
}

// =============================================================================
// Password Tests
// =============================================================================

/// Test the default policy through the free functions.
#[test]
fn test_password_default_policy() {
    assert!(validate_password("segura123"));
    assert!(!validate_password("corta1"));
    assert!(!validate_password("sinnumeros"));
    assert!(!validate_password("12345678"));

    assert_eq!(password_error("segura123"), None);
    assert_eq!(
        password_error("sinnumeros"),
        Some("La contraseña debe incluir al menos un número".to_string())
    );
}

/// Test a strict form policy end to end.
#[test]
fn test_password_strict_policy() {
    let policy = PasswordPolicy::new()
        .with_min_length(10)
        .uppercase()
        .lowercase()
        .special();

    assert!(policy.check("Clave.2024!").is_ok());

    assert_eq!(
        policy.check("Clave.24").unwrap_err(),
        PasswordError::TooShort { min: 10 }
    );
    assert_eq!(
        policy.check("clave.2024!").unwrap_err(),
        PasswordError::MissingUppercase
    );
}

/// Test that reported requirements come with their Spanish messages.
#[test]
fn test_password_messages_track_policy() {
    let policy = PasswordPolicy::new().with_min_length(12);
    let err = policy.check("corta1").unwrap_err();
    assert_eq!(
        err.user_message(),
        "La contraseña debe tener al menos 12 caracteres"
    );
}
