//! Date formatting and parsing for the es-CL locale.
//!
//! Dates are inputs here, never read from a clock. The numeric form is
//! day-first (`09-07-2024`); the long form spells the month in Spanish.

use chrono::{Datelike, NaiveDate};

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a date as `dd-mm-aaaa`.
///
/// ```
/// use chrono::NaiveDate;
/// use rut_codec::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
/// assert_eq!(format_date(date), "09-07-2024");
/// ```
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

/// Format a date the way it is read aloud: `9 de julio de 2024`.
#[must_use]
pub fn format_date_long(date: NaiveDate) -> String {
    let month = MONTHS_ES[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Parse a day-first date, accepting `dd-mm-aaaa` and `dd/mm/aaaa`.
///
/// Returns `None` for anything else, including impossible calendar
/// dates like the 31st of February.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .ok()
}
