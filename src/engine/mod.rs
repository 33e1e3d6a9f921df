// ============================================================================
// Engine Module
// Cost modules and the quotation engine that runs them
// ============================================================================

mod bending;
mod cutting;
mod errors;
mod material;
mod quotation_engine;
mod welding;

pub mod factory;

pub use bending::BendingModule;
pub use cutting::CuttingModule;
pub use errors::QuoteError;
pub use factory::{create_from_snapshot, create_seeded, QuotationEngineBuilder};
pub use material::MaterialModule;
pub use quotation_engine::{QuotationEngine, MAX_INPUT_MAGNITUDE};
pub use welding::WeldingModule;
