// ============================================================================
// Numeric Errors
// Error types for fixed-point money arithmetic and measurement parsing
// ============================================================================

use thiserror::Error;

/// Errors that can occur during fixed-point arithmetic or number parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Result exceeded the largest representable amount
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result fell below the smallest representable amount
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Conversion would lose significant digits
    #[error("precision loss: conversion would lose significant digits")]
    PrecisionLoss,
    /// Input string or value is invalid
    #[error("invalid input: could not parse value")]
    InvalidInput,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
