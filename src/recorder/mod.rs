// ============================================================================
// Recorder Module
// Order history implementations
// ============================================================================

mod memory;

pub use memory::InMemoryOrderRecorder;
