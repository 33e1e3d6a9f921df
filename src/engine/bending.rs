// ============================================================================
// Press-Brake Bending Cost Module
// Per-bend band price × bends × parts, plus one setup per batch
// ============================================================================

use crate::domain::{BendLengthBand, Operation, Process, QuoteTrace, BEND_MACHINE_LIMIT_MM};
use crate::interfaces::{CostModule, QuoteContext};
use crate::numeric::{checked_product, checked_total, NumericResult};
use rust_decimal::Decimal;

/// Prices press-brake work.
///
/// The per-bend price steps by bend length (≤1.5 m, ≤3 m, ≤6 m); it is not
/// interpolated. The tooling setup fee is charged once per batch, so it does
/// not grow with quantity.
pub struct BendingModule;

impl BendingModule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BendingModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CostModule for BendingModule {
    fn process(&self) -> Process {
        Process::Bending
    }

    fn name(&self) -> &str {
        "Bending"
    }

    fn price(&self, ctx: &QuoteContext<'_>, trace: &mut QuoteTrace) -> NumericResult<Decimal> {
        let inputs = ctx.inputs;
        if !inputs.bending_enabled || inputs.bends_per_part == 0 {
            trace.info(Process::Bending, "no bending");
            return Ok(Decimal::ZERO);
        }

        let bends = Decimal::from(inputs.bends_per_part);
        let quantity = ctx.quantity();

        let Some(profile) = ctx.catalog.find_bending_profile(inputs.thickness_mm) else {
            let rate = ctx.settings.bending_base_price_per_bend;
            tracing::warn!(thickness = %inputs.thickness_mm, "No calibrated bending profile");
            trace.warn(
                Process::Bending,
                format!(
                    "no calibrated bending profile for {} mm, used flat rate {} per bend",
                    inputs.thickness_mm, rate
                ),
            );
            trace.record_operation(Operation::Bend {
                bends_per_part: inputs.bends_per_part,
            });
            return checked_product([rate, bends, quantity]);
        };

        let band = BendLengthBand::for_length(inputs.bend_length_mm);
        if band == BendLengthBand::BeyondMachineLimit {
            tracing::warn!(
                bend_length_mm = %inputs.bend_length_mm,
                "Bend length exceeds press-brake bed"
            );
            trace.warn(
                Process::Bending,
                format!(
                    "bend length {} mm exceeds the {} mm machine limit, priced at the {} rate",
                    inputs.bend_length_mm,
                    BEND_MACHINE_LIMIT_MM,
                    band.label()
                ),
            );
        }

        let per_bend = profile.price_per_bend(band);
        let work = checked_product([bends, per_bend, quantity])?;
        // An empty batch needs no tooling
        let setup = if inputs.quantity > 0 {
            profile.setup_fee
        } else {
            Decimal::ZERO
        };

        trace.info(
            Process::Bending,
            format!(
                "{} bends x {} ({} mm tier, {}) x {} parts + setup {} (V-die {} mm)",
                inputs.bends_per_part,
                per_bend,
                profile.thickness_mm,
                band.label(),
                inputs.quantity,
                setup,
                profile.die_size_mm,
            ),
        );
        trace.record_operation(Operation::Bend {
            bends_per_part: inputs.bends_per_part,
        });

        checked_total([work, setup])
    }
}
