// ============================================================================
// Quote Errors
// ============================================================================

use crate::domain::ValidationError;
use crate::numeric::NumericError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Why a quote could not be produced.
///
/// Missing calibration never lands here; it is priced through a fallback
/// rate and reported as a trace warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Negative measurement, or one too large to be a real part
    #[error("input `{field}` is out of range: {value}")]
    OutOfDomain { field: &'static str, value: Decimal },

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
