// ============================================================================
// Measurement Parsing
// Lenient decimal parsing for operator-entered values
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a measurement or rate typed by an operator.
///
/// Accepts either `,` or `.` as the decimal separator, surrounding
/// whitespace, and an optional leading sign. Thousands separators are not
/// accepted since `,` is taken by the decimal separator.
pub fn parse_decimal(text: &str) -> NumericResult<Decimal> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(NumericError::InvalidInput);
    }
    Decimal::from_str(&normalized).map_err(|_| NumericError::InvalidInput)
}
