//! Display formatters for the es-CL locale: currency and dates.

pub mod currency;
pub mod date;

pub use currency::{format_clp, format_miles};
pub use date::{format_date, format_date_long, parse_date};
