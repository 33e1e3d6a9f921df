// ============================================================================
// Quotation Engine Factory
// Creates quotation engines from catalog snapshots
// ============================================================================

use super::quotation_engine::standard_modules;
use super::QuotationEngine;
use crate::catalog::CatalogSnapshot;
use crate::domain::{CatalogError, Process};
use crate::interfaces::{CatalogSource, CostModule, LoggingTraceSink, NoOpTraceSink, TraceSink};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a quotation engine over a catalog snapshot
///
/// # Arguments
/// * `snapshot` - Catalog snapshot, usually from [`crate::catalog::Catalog::snapshot`]
/// * `trace_sink` - Receives the trace lines of every quote
///
/// # Example
/// ```
/// use fabrication_quote::prelude::*;
/// use fabrication_quote::engine::factory::create_from_snapshot;
/// use std::sync::Arc;
///
/// let catalog = Catalog::seeded().unwrap();
/// let engine = create_from_snapshot(catalog.snapshot(), Arc::new(NoOpTraceSink)).unwrap();
/// ```
pub fn create_from_snapshot(
    snapshot: Arc<CatalogSnapshot>,
    trace_sink: Arc<dyn TraceSink>,
) -> Result<QuotationEngine, CatalogError> {
    // Snapshots from the store are already valid; hand-built ones may not be
    snapshot.validate()?;

    tracing::debug!(version = snapshot.version(), "Quotation engine created");
    Ok(QuotationEngine::new(snapshot, trace_sink))
}

/// Creates an engine over the shipped calibration
pub fn create_seeded(trace_sink: Arc<dyn TraceSink>) -> Result<QuotationEngine, CatalogError> {
    create_from_snapshot(Arc::new(CatalogSnapshot::seeded()?), trace_sink)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for quotation engines with a fluent API
///
/// # Example
/// ```
/// use fabrication_quote::prelude::*;
/// use std::sync::Arc;
///
/// let snapshot = CatalogSnapshot::seeded().unwrap();
/// let engine = QuotationEngineBuilder::new(Arc::new(snapshot))
///     .with_logging()
///     .without_module(Process::Welding)
///     .build();
/// assert_eq!(engine.module_names(), vec!["Material", "Cutting", "Bending"]);
/// ```
pub struct QuotationEngineBuilder {
    catalog: Arc<dyn CatalogSource>,
    modules: Vec<Box<dyn CostModule>>,
    trace_sink: Arc<dyn TraceSink>,
}

impl QuotationEngineBuilder {
    /// Start from the standard modules and a no-op trace sink
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            modules: standard_modules(),
            trace_sink: Arc::new(NoOpTraceSink),
        }
    }

    // ========================================================================
    // Trace Sink Configuration
    // ========================================================================

    pub fn with_trace_sink(mut self, trace_sink: Arc<dyn TraceSink>) -> Self {
        self.trace_sink = trace_sink;
        self
    }

    /// Forward trace lines to `tracing`
    pub fn with_logging(self) -> Self {
        self.with_trace_sink(Arc::new(LoggingTraceSink))
    }

    // ========================================================================
    // Module Configuration
    // ========================================================================

    /// Register a module, replacing any module for the same process
    pub fn with_module(mut self, module: Box<dyn CostModule>) -> Self {
        let process = module.process();
        self.modules.retain(|m| m.process() != process);
        self.modules.push(module);
        // Keep run order material, cutting, bending, welding
        self.modules.sort_by_key(|m| m.process());
        self
    }

    /// Drop the module for a process; that breakdown line stays zero
    pub fn without_module(mut self, process: Process) -> Self {
        self.modules.retain(|m| m.process() != process);
        self
    }

    pub fn build(self) -> QuotationEngine {
        QuotationEngine::with_modules(self.catalog, self.modules, self.trace_sink)
    }
}
