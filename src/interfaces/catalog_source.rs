// ============================================================================
// Catalog Source Interface
// Read-only view of settings, profile tables and materials
// ============================================================================

use crate::domain::{BendingProfile, CuttingProfile, EconomicSettings, MaterialKind, WeldingProfile};
use rust_decimal::Decimal;

/// Everything a quote computation reads besides the order itself.
///
/// Implementations must be immutable for their whole lifetime: the engine
/// assumes two calls with the same inputs see the same data. The mutable
/// [`crate::catalog::Catalog`] store deliberately does not implement this
/// trait; it hands out snapshots that do.
///
/// Profile lookups use ceiling semantics: the first tier whose key is at
/// least the query.
pub trait CatalogSource: Send + Sync {
    fn economic_settings(&self) -> &EconomicSettings;

    fn find_cutting_profile(&self, thickness_mm: Decimal) -> Option<&CuttingProfile>;

    /// Largest calibrated cutting tier, used as a fallback base rate
    fn largest_cutting_profile(&self) -> Option<&CuttingProfile>;

    fn find_bending_profile(&self, thickness_mm: Decimal) -> Option<&BendingProfile>;

    fn find_welding_profile(&self, fillet_size_mm: Decimal) -> Option<&WeldingProfile>;

    fn list_materials(&self) -> &[MaterialKind];

    /// Case-insensitive lookup by material name
    fn find_material(&self, name: &str) -> Option<&MaterialKind> {
        let name = name.trim();
        self.list_materials()
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }
}
