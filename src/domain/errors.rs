// ============================================================================
// Domain Errors
// Catalog integrity and caller-level input validation failures
// ============================================================================

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building or editing catalog data (settings, profile
/// tables, materials).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A settings rate or threshold is negative
    #[error("setting `{field}` must be non-negative, got {value}")]
    NegativeSetting { field: &'static str, value: Decimal },

    /// A profile row carries a negative value
    #[error("{table} profile at tier {tier}: `{field}` must be non-negative, got {value}")]
    NegativeProfileValue {
        table: &'static str,
        tier: Decimal,
        field: &'static str,
        value: Decimal,
    },

    /// Two rows of one profile table share a tier key
    #[error("{table} profile table has duplicate tier {tier}")]
    DuplicateTier { table: &'static str, tier: Decimal },

    /// Material row is unusable
    #[error("invalid material `{name}`: {reason}")]
    InvalidMaterial { name: String, reason: String },

    /// Two materials share a name (compared case-insensitively)
    #[error("material `{0}` is listed more than once")]
    DuplicateMaterial(String),

    /// Unrecognized gas label
    #[error("unknown cutting gas `{0}` (expected air or oxygen)")]
    UnknownGas(String),

    /// Catalog document could not be parsed
    #[cfg(feature = "serde")]
    #[error("catalog document is malformed: {0}")]
    Malformed(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed(err.to_string())
    }
}

/// Caller-level rejection of order inputs before quoting.
///
/// The engine itself degrades gracefully on absent inputs; these are the
/// cases an operator must fix before a quote is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("thickness must be positive, got {0} mm")]
    NonPositiveThickness(Decimal),

    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("no material selected")]
    MissingMaterial,

    #[error("either blank width and height or a measured weight is required")]
    MissingGeometry,

    #[error("`{field}` must be non-negative, got {value}")]
    NegativeValue { field: &'static str, value: Decimal },

    #[error("bending is enabled but `{0}` is not set")]
    IncompleteBending(&'static str),

    #[error("welding is enabled but the weld length is not set")]
    IncompleteWelding,
}
