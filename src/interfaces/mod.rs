// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod catalog_source;
mod cost_module;
mod order_recorder;
mod trace_sink;

pub use catalog_source::CatalogSource;
pub use cost_module::{CostModule, QuoteContext};
pub use order_recorder::{OrderRecorder, RecorderError, DEFAULT_RECENT_LIMIT};
pub use trace_sink::{LoggingTraceSink, NoOpTraceSink, TraceSink};
