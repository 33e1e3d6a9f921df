// ============================================================================
// Catalog Snapshot
// Immutable settings + profile tables + materials, shared by quote engines
// ============================================================================

use super::defaults;
use crate::domain::{
    BendingProfile, CatalogError, CuttingProfile, EconomicSettings, MaterialKind, ProfileTable,
    WeldingProfile,
};
use crate::interfaces::CatalogSource;
use rust_decimal::Decimal;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A consistent, validated view of the catalog.
///
/// Never mutated after construction. Edits go through
/// [`super::Catalog`], which replaces the snapshot as a whole.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogSnapshot {
    /// Bumped by every catalog edit; 0 for a freshly built snapshot
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) version: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) settings: EconomicSettings,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) cutting: ProfileTable<CuttingProfile>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) bending: ProfileTable<BendingProfile>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) welding: ProfileTable<WeldingProfile>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) materials: Vec<MaterialKind>,
}

impl CatalogSnapshot {
    /// Build a snapshot from raw rows in any order.
    ///
    /// # Errors
    /// Any settings, profile or material integrity failure.
    pub fn new(
        settings: EconomicSettings,
        cutting: Vec<CuttingProfile>,
        bending: Vec<BendingProfile>,
        welding: Vec<WeldingProfile>,
        materials: Vec<MaterialKind>,
    ) -> Result<Self, CatalogError> {
        let snapshot = Self {
            version: 0,
            settings,
            cutting: ProfileTable::new(cutting)?,
            bending: ProfileTable::new(bending)?,
            welding: ProfileTable::new(welding)?,
            materials,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Default settings and the shipped workshop calibration
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(
            EconomicSettings::default(),
            defaults::cutting_profiles(),
            defaults::bending_profiles(),
            defaults::welding_profiles(),
            defaults::materials(),
        )
    }

    /// Default settings, no profiles and no materials.
    ///
    /// Every process prices through its fallback rate.
    pub fn uncalibrated() -> Self {
        Self {
            version: 0,
            settings: EconomicSettings::default(),
            cutting: ProfileTable::empty(),
            bending: ProfileTable::empty(),
            welding: ProfileTable::empty(),
            materials: Vec::new(),
        }
    }

    /// Check settings and materials.
    ///
    /// Profile tables validate themselves when built.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.settings.validate()?;
        validate_materials(&self.materials)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn settings(&self) -> &EconomicSettings {
        &self.settings
    }

    pub fn cutting_profiles(&self) -> &ProfileTable<CuttingProfile> {
        &self.cutting
    }

    pub fn bending_profiles(&self) -> &ProfileTable<BendingProfile> {
        &self.bending
    }

    pub fn welding_profiles(&self) -> &ProfileTable<WeldingProfile> {
        &self.welding
    }
}

pub(crate) fn validate_materials(materials: &[MaterialKind]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(materials.len());
    for material in materials {
        material.validate()?;
        if !seen.insert(material.name.trim().to_lowercase()) {
            return Err(CatalogError::DuplicateMaterial(material.name.clone()));
        }
    }
    Ok(())
}

impl CatalogSource for CatalogSnapshot {
    fn economic_settings(&self) -> &EconomicSettings {
        &self.settings
    }

    fn find_cutting_profile(&self, thickness_mm: Decimal) -> Option<&CuttingProfile> {
        self.cutting.find_tier(thickness_mm)
    }

    fn largest_cutting_profile(&self) -> Option<&CuttingProfile> {
        self.cutting.largest_tier()
    }

    fn find_bending_profile(&self, thickness_mm: Decimal) -> Option<&BendingProfile> {
        self.bending.find_tier(thickness_mm)
    }

    fn find_welding_profile(&self, fillet_size_mm: Decimal) -> Option<&WeldingProfile> {
        self.welding.find_tier(fillet_size_mm)
    }

    fn list_materials(&self) -> &[MaterialKind] {
        &self.materials
    }
}
