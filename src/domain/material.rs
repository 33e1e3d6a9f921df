// ============================================================================
// Material Kind
// Sheet/plate material with density and purchase price grid
// ============================================================================

use super::errors::CatalogError;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Purchase price that applies up to a plate thickness
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialPriceTier {
    pub max_thickness_mm: Decimal,
    pub price_per_kg: Decimal,
}

impl MaterialPriceTier {
    pub fn new(max_thickness_mm: Decimal, price_per_kg: Decimal) -> Self {
        Self {
            max_thickness_mm,
            price_per_kg,
        }
    }
}

/// A purchasable material.
///
/// Suppliers price thick plate differently from sheet, so a material may
/// carry a thickness-graded price grid. Without one, `purchase_price_per_kg`
/// applies to every thickness.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialKind {
    pub name: String,
    /// g/cm³ (7.85 for carbon steel)
    pub density_g_cm3: Decimal,
    pub purchase_price_per_kg: Decimal,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price_tiers: Vec<MaterialPriceTier>,
}

impl MaterialKind {
    pub fn new(name: impl Into<String>, density_g_cm3: Decimal, purchase_price_per_kg: Decimal) -> Self {
        Self {
            name: name.into(),
            density_g_cm3,
            purchase_price_per_kg,
            price_tiers: Vec::new(),
        }
    }

    /// Builder method: attach a thickness price grid (any order)
    pub fn with_price_tiers(mut self, mut tiers: Vec<MaterialPriceTier>) -> Self {
        tiers.sort_by(|a, b| a.max_thickness_mm.cmp(&b.max_thickness_mm));
        self.price_tiers = tiers;
        self
    }

    /// Purchase price per kg for a plate thickness.
    ///
    /// Tightest grid tier whose bound covers the thickness; beyond the
    /// largest bound that tier's price holds. Grids loaded from documents
    /// may be unsorted, so this does not rely on order.
    pub fn purchase_price_for(&self, thickness_mm: Decimal) -> Decimal {
        let by_bound = |a: &&MaterialPriceTier, b: &&MaterialPriceTier| {
            a.max_thickness_mm.cmp(&b.max_thickness_mm)
        };
        self.price_tiers
            .iter()
            .filter(|tier| tier.max_thickness_mm >= thickness_mm)
            .min_by(by_bound)
            .or_else(|| self.price_tiers.iter().max_by(by_bound))
            .map(|tier| tier.price_per_kg)
            .unwrap_or(self.purchase_price_per_kg)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidMaterial {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.density_g_cm3 <= Decimal::ZERO {
            return Err(invalid("density must be positive"));
        }
        if self.purchase_price_per_kg < Decimal::ZERO {
            return Err(invalid("purchase price is negative"));
        }
        if self
            .price_tiers
            .iter()
            .any(|t| t.price_per_kg < Decimal::ZERO || t.max_thickness_mm < Decimal::ZERO)
        {
            return Err(invalid("price grid has a negative entry"));
        }
        Ok(())
    }
}
