// ============================================================================
// Catalog Store
// Mutable catalog that publishes immutable snapshots
// ============================================================================

use super::snapshot::{validate_materials, CatalogSnapshot};
use crate::domain::{
    BendingProfile, CatalogError, CuttingProfile, EconomicSettings, MaterialKind, ProfileTable,
    WeldingProfile,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Editable catalog.
///
/// Every edit validates its input, copies the current snapshot, applies the
/// change and swaps the new snapshot in. Engines built from an earlier
/// snapshot keep pricing against it.
pub struct Catalog {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl Catalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Catalog holding the shipped calibration
    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self::new(CatalogSnapshot::seeded()?))
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.current.read())
    }

    pub fn version(&self) -> u64 {
        self.current.read().version
    }

    pub fn update_settings(
        &self,
        settings: EconomicSettings,
    ) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        settings.validate()?;
        let snapshot = self.publish(|draft| draft.settings = settings);
        tracing::info!(version = snapshot.version, "Economic settings updated");
        Ok(snapshot)
    }

    /// Replace the whole cutting table
    pub fn replace_cutting_profiles(
        &self,
        rows: Vec<CuttingProfile>,
    ) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let table = ProfileTable::new(rows)?;
        let tiers = table.len();
        let snapshot = self.publish(|draft| draft.cutting = table);
        tracing::info!(version = snapshot.version, tiers, "Cutting profiles replaced");
        Ok(snapshot)
    }

    pub fn replace_bending_profiles(
        &self,
        rows: Vec<BendingProfile>,
    ) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let table = ProfileTable::new(rows)?;
        let tiers = table.len();
        let snapshot = self.publish(|draft| draft.bending = table);
        tracing::info!(version = snapshot.version, tiers, "Bending profiles replaced");
        Ok(snapshot)
    }

    pub fn replace_welding_profiles(
        &self,
        rows: Vec<WeldingProfile>,
    ) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let table = ProfileTable::new(rows)?;
        let tiers = table.len();
        let snapshot = self.publish(|draft| draft.welding = table);
        tracing::info!(version = snapshot.version, tiers, "Welding profiles replaced");
        Ok(snapshot)
    }

    pub fn replace_materials(
        &self,
        materials: Vec<MaterialKind>,
    ) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        validate_materials(&materials)?;
        let count = materials.len();
        let snapshot = self.publish(|draft| draft.materials = materials);
        tracing::info!(version = snapshot.version, count, "Materials replaced");
        Ok(snapshot)
    }

    /// Copy-on-write: clone the current snapshot, edit it, swap it in
    fn publish<F>(&self, edit: F) -> Arc<CatalogSnapshot>
    where
        F: FnOnce(&mut CatalogSnapshot),
    {
        let mut current = self.current.write();
        let mut draft = CatalogSnapshot::clone(&current);
        edit(&mut draft);
        draft.version = current.version + 1;
        *current = Arc::new(draft);
        Arc::clone(&current)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogSnapshot::uncalibrated())
    }
}
