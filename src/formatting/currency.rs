//! Chilean peso formatting.
//!
//! CLP amounts are whole pesos with dot-grouped thousands and no decimal
//! part: `$1.234.567`. The grouping routine is the same one the RUT
//! formatter uses.

use crate::rut::format::group_thousands;

/// Format an amount in Chilean pesos.
///
/// ```
/// use rut_codec::format_clp;
///
/// assert_eq!(format_clp(1_234_567), "$1.234.567");
/// assert_eq!(format_clp(-1234), "-$1.234");
/// assert_eq!(format_clp(0), "$0");
/// ```
#[must_use]
pub fn format_clp(amount: i64) -> String {
    let grouped = group_thousands(&amount.unsigned_abs().to_string());
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Group a bare count with thousands separators: `12.345`.
#[must_use]
pub fn format_miles(n: u64) -> String {
    group_thousands(&n.to_string())
}
