//! Python bindings for the rut-codec validators and formatters.
//!
//! Everything crosses the boundary as strings and integers, so the
//! module works from any Python web stack without conversion glue.
//!
//! # Quick Start
//!
//! ```python
//! import rut_codec
//!
//! rut_codec.validate_rut("12.345.678-5")   # True
//! rut_codec.format_rut("123456785")        # "12.345.678-5"
//! rut_codec.rut_error("12345678-9")        # "El RUT ingresado no es válido"
//!
//! rut = rut_codec.Rut("12345678-5")
//! rut.number                               # 12345678
//! str(rut)                                 # "12.345.678-5"
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{formatting, rut, validation};

/// Python wrapper for a validated RUT.
#[pyclass(name = "Rut")]
#[derive(Clone, Debug)]
pub struct PyRut(pub rut::Rut);

#[pymethods]
impl PyRut {
    /// Parse and validate a raw input, raising ValueError on failure.
    #[new]
    fn new(raw: &str) -> PyResult<Self> {
        rut::Rut::parse(raw)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// The body as an integer.
    #[getter]
    fn number(&self) -> u32 {
        self.0.number()
    }

    /// The verification character, `"0"`-`"9"` or `"K"`.
    #[getter]
    fn check_digit(&self) -> String {
        self.0.check_digit().to_char().to_string()
    }

    /// The undotted canonical form, `12345678-5`.
    fn compact(&self) -> String {
        self.0.compact()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Rut({:?})", self.0.compact())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.number()) * 11 + u64::from(self.0.check_digit().to_index())
    }
}

#[pyfunction]
fn clean_rut(raw: &str) -> String {
    rut::clean_rut(raw)
}

#[pyfunction]
fn format_rut(raw: &str) -> String {
    rut::format_rut(raw)
}

#[pyfunction]
fn validate_rut(raw: &str) -> bool {
    rut::validate_rut(raw)
}

#[pyfunction]
fn rut_error(raw: &str) -> Option<String> {
    rut::rut_error(raw)
}

#[pyfunction]
fn validate_email(raw: &str) -> bool {
    validation::validate_email(raw)
}

#[pyfunction]
fn email_error(raw: &str) -> Option<String> {
    validation::email_error(raw)
}

#[pyfunction]
fn clean_phone(raw: &str) -> String {
    validation::clean_phone(raw)
}

#[pyfunction]
fn validate_phone(raw: &str) -> bool {
    validation::validate_phone(raw)
}

#[pyfunction]
fn phone_error(raw: &str) -> Option<String> {
    validation::phone_error(raw)
}

/// `"mobile"`, `"landline"`, or None when the number is invalid.
#[pyfunction]
fn phone_kind(raw: &str) -> Option<String> {
    validation::phone_kind(raw).map(|kind| {
        match kind {
            validation::PhoneKind::Mobile => "mobile",
            validation::PhoneKind::Landline => "landline",
        }
        .to_string()
    })
}

#[pyfunction]
fn format_phone(raw: &str) -> Option<String> {
    validation::format_phone(raw)
}

#[pyfunction]
fn validate_password(raw: &str) -> bool {
    validation::validate_password(raw)
}

#[pyfunction]
fn password_error(raw: &str) -> Option<String> {
    validation::password_error(raw)
}

#[pyfunction]
fn format_clp(amount: i64) -> String {
    formatting::format_clp(amount)
}

#[pyfunction]
fn format_miles(n: u64) -> String {
    formatting::format_miles(n)
}

/// rut-codec: validation and formatting for Chilean form inputs.
///
/// This module provides:
/// - The RUT codec (clean, format, validate, diagnose)
/// - Email, phone and password validators
/// - es-CL currency and count formatting
#[pymodule]
fn rut_codec(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRut>()?;

    // RUT codec
    m.add_function(wrap_pyfunction!(clean_rut, m)?)?;
    m.add_function(wrap_pyfunction!(format_rut, m)?)?;
    m.add_function(wrap_pyfunction!(validate_rut, m)?)?;
    m.add_function(wrap_pyfunction!(rut_error, m)?)?;

    // Other validators
    m.add_function(wrap_pyfunction!(validate_email, m)?)?;
    m.add_function(wrap_pyfunction!(email_error, m)?)?;
    m.add_function(wrap_pyfunction!(clean_phone, m)?)?;
    m.add_function(wrap_pyfunction!(validate_phone, m)?)?;
    m.add_function(wrap_pyfunction!(phone_error, m)?)?;
    m.add_function(wrap_pyfunction!(phone_kind, m)?)?;
    m.add_function(wrap_pyfunction!(format_phone, m)?)?;
    m.add_function(wrap_pyfunction!(validate_password, m)?)?;
    m.add_function(wrap_pyfunction!(password_error, m)?)?;

    // Formatters
    m.add_function(wrap_pyfunction!(format_clp, m)?)?;
    m.add_function(wrap_pyfunction!(format_miles, m)?)?;

    Ok(())
}
