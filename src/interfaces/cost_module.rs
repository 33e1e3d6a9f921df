// ============================================================================
// Cost Module Interface
// Contract for pluggable per-process pricing
// ============================================================================

use super::CatalogSource;
use crate::domain::{EconomicSettings, OrderInputs, Process, QuoteTrace};
use crate::numeric::NumericResult;
use rust_decimal::Decimal;

/// Read-only inputs shared by every module of one quote computation
#[derive(Clone, Copy)]
pub struct QuoteContext<'a> {
    pub settings: &'a EconomicSettings,
    pub catalog: &'a dyn CatalogSource,
    pub inputs: &'a OrderInputs,
}

impl<'a> QuoteContext<'a> {
    pub fn new(catalog: &'a dyn CatalogSource, inputs: &'a OrderInputs) -> Self {
        Self {
            settings: catalog.economic_settings(),
            catalog,
            inputs,
        }
    }

    /// Part count as a Decimal factor (0 parts prices as 0)
    pub fn quantity(&self) -> Decimal {
        Decimal::from(self.inputs.quantity)
    }
}

/// Strategy interface for one costed process.
/// Implementations: MaterialModule, CuttingModule, BendingModule, WeldingModule.
pub trait CostModule: Send + Sync {
    /// Process this module prices; also selects the breakdown field
    fn process(&self) -> Process;

    /// Module name for logging
    fn name(&self) -> &str;

    /// Price the whole batch for this process.
    ///
    /// Returns an unrounded amount; the engine rounds it to `Money` once.
    /// A module that does not apply to the order returns zero and says why
    /// in the trace. Missing calibration is not an error: the module falls
    /// back to a flat rate and records a warning.
    ///
    /// # Errors
    /// Only arithmetic overflow on extreme inputs.
    fn price(&self, ctx: &QuoteContext<'_>, trace: &mut QuoteTrace) -> NumericResult<Decimal>;
}
