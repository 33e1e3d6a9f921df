// ============================================================================
// Quotation Engine
// Runs the cost modules over one order and assembles the breakdown
// ============================================================================

use super::errors::QuoteError;
use super::{BendingModule, CuttingModule, MaterialModule, WeldingModule};
use crate::domain::{OrderInputs, Process, QuoteBreakdown, QuoteTrace};
use crate::interfaces::{CatalogSource, CostModule, QuoteContext, TraceSink};
use crate::numeric::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Largest accepted magnitude of any measurement
pub const MAX_INPUT_MAGNITUDE: Decimal = dec!(1000000000);

/// Pure quote calculator over an immutable catalog.
///
/// `compute_quote` has no side effects besides notifying the trace sink:
/// the same inputs against the same catalog give the same breakdown.
pub struct QuotationEngine {
    /// Settings, profiles and materials this engine prices against
    catalog: Arc<dyn CatalogSource>,

    /// Cost modules in run order
    modules: Vec<Box<dyn CostModule>>,

    /// Receives every trace line of every quote
    trace_sink: Arc<dyn TraceSink>,
}

impl QuotationEngine {
    /// Create an engine with the standard material, cutting, bending and
    /// welding modules
    pub fn new(catalog: Arc<dyn CatalogSource>, trace_sink: Arc<dyn TraceSink>) -> Self {
        Self::with_modules(catalog, standard_modules(), trace_sink)
    }

    pub fn with_modules(
        catalog: Arc<dyn CatalogSource>,
        modules: Vec<Box<dyn CostModule>>,
        trace_sink: Arc<dyn TraceSink>,
    ) -> Self {
        Self {
            catalog,
            modules,
            trace_sink,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogSource {
        self.catalog.as_ref()
    }

    /// Names of the registered modules in run order
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    /// Price an order.
    ///
    /// Each module's amount is rounded to cents once; the total is the sum
    /// of the rounded amounts.
    ///
    /// # Errors
    /// - `OutOfDomain` for a negative measurement or one above 1e9
    /// - `Numeric` if an amount does not fit in `Money`
    pub fn compute_quote(&self, inputs: &OrderInputs) -> Result<QuoteBreakdown, QuoteError> {
        check_domain(inputs)?;

        let ctx = QuoteContext::new(self.catalog.as_ref(), inputs);
        let mut trace = QuoteTrace::new();
        let mut costs = ProcessCosts::default();

        for module in &self.modules {
            let raw = module.price(&ctx, &mut trace)?;
            let amount = Money::from_decimal_rounded(raw.max(Decimal::ZERO))?;
            tracing::debug!(module = module.name(), %amount, "Module priced");
            costs.add(module.process(), amount)?;
        }

        let breakdown = QuoteBreakdown::new(
            costs.material,
            costs.cutting,
            costs.bending,
            costs.welding,
            trace,
        )?;

        self.trace_sink.on_lines(&breakdown.trace);
        tracing::debug!(
            total = %breakdown.total,
            warnings = breakdown.warnings().count(),
            "Quote computed"
        );

        Ok(breakdown)
    }

    /// Validate the inputs as an operator-facing form would, then price them
    pub fn quote_validated(&self, inputs: &OrderInputs) -> Result<QuoteBreakdown, QuoteError> {
        inputs.validate()?;
        self.compute_quote(inputs)
    }
}

pub(crate) fn standard_modules() -> Vec<Box<dyn CostModule>> {
    vec![
        Box::new(MaterialModule::new()),
        Box::new(CuttingModule::new()),
        Box::new(BendingModule::new()),
        Box::new(WeldingModule::new()),
    ]
}

fn check_domain(inputs: &OrderInputs) -> Result<(), QuoteError> {
    let weld = inputs.weld_measurement();
    for (field, value) in inputs.measurements().into_iter().chain(std::iter::once(weld)) {
        if value < Decimal::ZERO || value > MAX_INPUT_MAGNITUDE {
            return Err(QuoteError::OutOfDomain { field, value });
        }
    }
    Ok(())
}

#[derive(Default)]
struct ProcessCosts {
    material: Money,
    cutting: Money,
    bending: Money,
    welding: Money,
}

impl ProcessCosts {
    fn add(&mut self, process: Process, amount: Money) -> Result<(), QuoteError> {
        let slot = match process {
            Process::Material => &mut self.material,
            Process::Cutting => &mut self.cutting,
            Process::Bending => &mut self.bending,
            Process::Welding => &mut self.welding,
        };
        *slot = slot.checked_add(amount)?;
        Ok(())
    }
}
