// ============================================================================
// Material Cost Module
// Sheet/plate weight × marked-up purchase price
// ============================================================================

use crate::domain::{Operation, Process, QuoteTrace};
use crate::interfaces::{CostModule, QuoteContext};
use crate::numeric::{checked_product, guarded_div, NumericResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// mm³ × g/cm³ → kg
const MM3_G_CM3_TO_KG: Decimal = dec!(1000000);

/// Prices the raw material of the batch.
///
/// A measured batch weight wins over blank geometry; otherwise the blank
/// rectangle is weighed as `width × height × thickness × density`.
pub struct MaterialModule;

impl MaterialModule {
    pub fn new() -> Self {
        Self
    }

    /// Weight of one part in kg, or None when neither weight nor geometry is known
    fn weight_per_part(
        ctx: &QuoteContext<'_>,
        density_g_cm3: Decimal,
    ) -> NumericResult<Option<Decimal>> {
        let inputs = ctx.inputs;
        if let Some(batch_kg) = inputs.effective_measured_weight() {
            return guarded_div(batch_kg, inputs.amortization_divisor()).map(Some);
        }
        if inputs.has_blank_geometry() {
            let grams_scaled = checked_product([
                inputs.width_mm,
                inputs.height_mm,
                inputs.thickness_mm,
                density_g_cm3,
            ])?;
            return Ok(Some(grams_scaled / MM3_G_CM3_TO_KG));
        }
        Ok(None)
    }
}

impl Default for MaterialModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CostModule for MaterialModule {
    fn process(&self) -> Process {
        Process::Material
    }

    fn name(&self) -> &str {
        "Material"
    }

    fn price(&self, ctx: &QuoteContext<'_>, trace: &mut QuoteTrace) -> NumericResult<Decimal> {
        let inputs = ctx.inputs;
        let has_size = inputs.effective_measured_weight().is_some() || inputs.has_blank_geometry();

        let Some(material) = inputs.material.as_ref() else {
            if has_size {
                trace.warn(Process::Material, "no material selected, metal not priced");
            } else {
                trace.info(Process::Material, "no material");
            }
            return Ok(Decimal::ZERO);
        };

        let Some(kg_per_part) = Self::weight_per_part(ctx, material.density_g_cm3)? else {
            trace.info(
                Process::Material,
                format!("{}: no blank size or measured weight, metal not priced", material.name),
            );
            return Ok(Decimal::ZERO);
        };

        let purchase = material.purchase_price_for(inputs.thickness_mm);
        let sell_per_kg = checked_product([purchase, ctx.settings.material_markup_factor()])?;
        let cost = checked_product([kg_per_part, ctx.quantity(), sell_per_kg])?;

        trace.info(
            Process::Material,
            format!(
                "{}: {} kg per part x {}, {}/kg (purchase {} + {}%)",
                material.name,
                kg_per_part.round_dp(3),
                inputs.quantity,
                sell_per_kg.round_dp(2),
                purchase,
                ctx.settings.material_markup_percent,
            ),
        );
        trace.record_operation(Operation::Metal {
            kg_per_part,
            quantity: inputs.quantity,
        });

        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSnapshot;
    use crate::domain::{MaterialKind, OrderInputs};
    use crate::interfaces::CatalogSource;

    fn price(inputs: &OrderInputs) -> (Decimal, QuoteTrace) {
        let catalog = CatalogSnapshot::seeded().unwrap();
        let ctx = QuoteContext::new(&catalog, inputs);
        let mut trace = QuoteTrace::new();
        let cost = MaterialModule.price(&ctx, &mut trace).unwrap();
        (cost, trace)
    }

    fn steel() -> MaterialKind {
        MaterialKind::new("Steel", dec!(7.85), dec!(400))
    }

    #[test]
    fn test_weight_from_geometry() {
        // 1000 x 500 x 2 mm = 1e6 mm³ -> 7.85 kg; sell 400 x 1.15 = 460/kg
        let inputs = OrderInputs::new("c", dec!(2), 3)
            .with_blank(dec!(1000), dec!(500))
            .with_material(steel());
        let (cost, trace) = price(&inputs);
        assert_eq!(cost, dec!(7.85) * dec!(3) * dec!(460));
        assert!(!trace.lines()[0].is_warning());
    }

    #[test]
    fn test_measured_weight_takes_precedence() {
        let inputs = OrderInputs::new("c", dec!(2), 4)
            .with_blank(dec!(1000), dec!(500))
            .with_measured_weight(dec!(10))
            .with_material(steel());
        let (cost, _) = price(&inputs);
        // 10 kg batch regardless of geometry
        assert_eq!(cost, dec!(4600));
    }

    #[test]
    fn test_missing_material_warns() {
        let inputs = OrderInputs::new("c", dec!(2), 1).with_blank(dec!(100), dec!(100));
        let (cost, trace) = price(&inputs);
        assert_eq!(cost, Decimal::ZERO);
        assert!(trace.lines()[0].is_warning());
    }

    #[test]
    fn test_missing_geometry_is_zero() {
        let inputs = OrderInputs::new("c", dec!(2), 1).with_material(steel());
        let (cost, trace) = price(&inputs);
        assert_eq!(cost, Decimal::ZERO);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_oversized_blank_overflows_into_error() {
        let inputs = OrderInputs::new("c", dec!(1000000000), 1)
            .with_blank(dec!(1000000000), dec!(1000000000))
            .with_material(MaterialKind::new("Dense", dec!(100), dec!(355)));
        let catalog = CatalogSnapshot::seeded().unwrap();
        let ctx = QuoteContext::new(&catalog, &inputs);
        let mut trace = QuoteTrace::new();
        assert_eq!(
            MaterialModule.price(&ctx, &mut trace),
            Err(crate::numeric::NumericError::Overflow)
        );
    }

    #[test]
    fn test_thickness_price_grid_applies() {
        let catalog = CatalogSnapshot::seeded().unwrap();
        let black_steel = catalog.find_material("carbon steel (st3)").unwrap().clone();
        let thin = OrderInputs::new("c", dec!(10), 1)
            .with_measured_weight(dec!(1))
            .with_material(black_steel.clone());
        let thick = OrderInputs::new("c", dec!(30), 1)
            .with_measured_weight(dec!(1))
            .with_material(black_steel);
        assert_eq!(price(&thin).0, dec!(355) * dec!(1.15));
        assert_eq!(price(&thick).0, dec!(385) * dec!(1.15));
    }
}
