// ============================================================================
// Catalog Module
// Settings, profile tables and materials: seed data, snapshots, editing
// ============================================================================

pub mod defaults;
#[cfg(feature = "serde")]
mod loader;
mod snapshot;
mod store;

pub use snapshot::CatalogSnapshot;
pub use store::Catalog;
