// ============================================================================
// Numeric Module
// Fixed-point money and decimal helpers for cost calculations
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: Fixed-point decimal with compile-time precision
// - Money: the two-place currency amount every quote line is expressed in
// - NumericError: Error types for arithmetic and parsing
// - parse_decimal: comma-or-dot measurement parsing
//
// Design principles:
// - Formulas run in rust_decimal::Decimal, never in binary floating point
// - One rounding point: Decimal -> Money, half away from zero
// - All fallible arithmetic returns Result (no panics)

mod errors;
mod fixed_decimal;
mod parse;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, Money};
pub use parse::parse_decimal;

use rust_decimal::Decimal;

/// Divide, yielding zero when the divisor is zero or negative.
///
/// Every per-unit-time rate in the engine goes through this guard so that a
/// zero speed, flow rate or work calendar prices as zero instead of failing.
///
/// # Errors
/// `Overflow` when a tiny positive divisor pushes the quotient out of range
#[inline]
pub fn guarded_div(numerator: Decimal, divisor: Decimal) -> NumericResult<Decimal> {
    if divisor <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    numerator.checked_div(divisor).ok_or(NumericError::Overflow)
}

/// Multiply factors, failing with `Overflow` instead of panicking.
pub fn checked_product<I>(factors: I) -> NumericResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    factors.into_iter().try_fold(Decimal::ONE, |acc, factor| {
        acc.checked_mul(factor).ok_or(NumericError::Overflow)
    })
}

/// Add terms, failing with `Overflow` instead of panicking.
pub fn checked_total<I>(terms: I) -> NumericResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    terms.into_iter().try_fold(Decimal::ZERO, |acc, term| {
        acc.checked_add(term).ok_or(NumericError::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_guarded_div() {
        assert_eq!(guarded_div(dec!(10), dec!(4)), Ok(dec!(2.5)));
        assert_eq!(guarded_div(dec!(10), Decimal::ZERO), Ok(Decimal::ZERO));
        assert_eq!(guarded_div(dec!(10), dec!(-1)), Ok(Decimal::ZERO));
        assert_eq!(
            guarded_div(Decimal::MAX, dec!(0.001)),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_checked_total() {
        assert_eq!(checked_total([dec!(1.5), dec!(2), dec!(-0.5)]), Ok(dec!(3)));
        assert_eq!(checked_total([Decimal::MAX, Decimal::ONE]), Err(NumericError::Overflow));
    }

    #[test]
    fn test_checked_product() {
        assert_eq!(checked_product([dec!(2.5), dec!(4), dec!(3)]), Ok(dec!(30)));
        assert_eq!(checked_product([Decimal::MAX, dec!(2)]), Err(NumericError::Overflow));
    }
}
