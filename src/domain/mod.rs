// ============================================================================
// Domain Models Module
// Settings, profile tables, materials, order inputs and quote results
// ============================================================================

pub mod errors;
pub mod material;
pub mod order_inputs;
pub mod profile_table;
pub mod profiles;
pub mod quote;
pub mod record;
pub mod settings;

pub use errors::{CatalogError, ValidationError};
pub use material::{MaterialKind, MaterialPriceTier};
pub use order_inputs::OrderInputs;
pub use profile_table::ProfileTable;
pub use profiles::{
    estimated_fillet_size, BendLengthBand, BendingProfile, CuttingProfile, Tiered, WeldingProfile,
    BEND_BAND_MEDIUM_MM, BEND_BAND_SHORT_MM, BEND_MACHINE_LIMIT_MM, FILLET_TO_THICKNESS_RATIO,
};
pub use quote::{Operation, Process, QuoteBreakdown, QuoteTrace, Severity, TraceLine};
pub use record::{OrderId, OrderRecord, UNTITLED_CLIENT};
pub use settings::{EconomicSettings, GasBottle, GasKind};
