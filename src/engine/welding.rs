// ============================================================================
// Welding Cost Module
// Wire, shielding gas, welder time and consumables per centimeter of seam
// ============================================================================

use crate::domain::{estimated_fillet_size, Operation, Process, QuoteTrace};
use crate::interfaces::{CostModule, QuoteContext};
use crate::numeric::{checked_product, checked_total, guarded_div, NumericResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const GRAMS_PER_KG: Decimal = dec!(1000);

/// Prices welding from physics rather than a flat per-cm rate.
///
/// The fillet leg is estimated as 0.7 × thickness and resolved against the
/// welding table. The resulting price is linear in seam length and in
/// quantity.
pub struct WeldingModule;

impl WeldingModule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WeldingModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CostModule for WeldingModule {
    fn process(&self) -> Process {
        Process::Welding
    }

    fn name(&self) -> &str {
        "Welding"
    }

    fn price(&self, ctx: &QuoteContext<'_>, trace: &mut QuoteTrace) -> NumericResult<Decimal> {
        let inputs = ctx.inputs;
        let settings = ctx.settings;
        let length = inputs.weld_length_cm;

        if !inputs.welding_enabled || length <= Decimal::ZERO {
            trace.info(Process::Welding, "no welding");
            return Ok(Decimal::ZERO);
        }

        let fillet = estimated_fillet_size(inputs.thickness_mm);
        let operation = Operation::Weld { length_cm: length };

        let Some(profile) = ctx.catalog.find_welding_profile(fillet) else {
            let rate = settings.welding_legacy_cost_per_cm;
            tracing::warn!(fillet_mm = %fillet, "No calibrated welding profile");
            trace.warn(
                Process::Welding,
                format!(
                    "no calibrated welding profile for a {} mm fillet, used flat rate {} per cm",
                    fillet, rate
                ),
            );
            trace.record_operation(operation);
            return checked_product([rate, length, ctx.quantity()]);
        };

        let minutes = guarded_div(length, profile.welding_speed_cm_per_min)?;
        let wire_g_per_cm = if profile.wire_weight_g_per_cm > Decimal::ZERO {
            profile.wire_weight_g_per_cm
        } else {
            settings.wire_consumption_g_per_cm
        };

        let wire_kg = checked_product([wire_g_per_cm, length])? / GRAMS_PER_KG;
        let wire = checked_product([wire_kg, settings.wire_price_per_kg])?;
        let gas = checked_product([settings.welding_gas_cost_per_minute()?, minutes])?;
        let labor = checked_product([settings.welder_per_minute_rate()?, minutes])?;
        let consumables = checked_product([settings.consumables_per_minute()?, minutes])?;
        let base = checked_total([wire, gas, labor, consumables])?;
        let price_per_cm = guarded_div(checked_product([base, profile.markup_multiplier])?, length)?;

        trace.info(
            Process::Welding,
            format!(
                "{} cm, fillet {} mm ({} mm tier): {} min; wire {}, gas {}, welder {}, consumables {}",
                length,
                fillet,
                profile.fillet_size_mm,
                minutes.round_dp(2),
                wire.round_dp(2),
                gas.round_dp(2),
                labor.round_dp(2),
                consumables.round_dp(2),
            ),
        );
        trace.info(
            Process::Welding,
            format!(
                "{}/cm at x{} markup (reference sheet: cost {}/cm, price {}/cm)",
                price_per_cm.round_dp(2),
                profile.markup_multiplier,
                profile.base_cost_per_cm,
                profile.price_per_cm,
            ),
        );
        trace.record_operation(operation);

        checked_product([price_per_cm, length, ctx.quantity()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSnapshot;
    use crate::domain::{EconomicSettings, OrderInputs, WeldingProfile};
    use proptest::prelude::*;

    fn single_row_catalog(row: WeldingProfile) -> CatalogSnapshot {
        CatalogSnapshot::new(
            EconomicSettings::default(),
            Vec::new(),
            Vec::new(),
            vec![row],
            Vec::new(),
        )
        .unwrap()
    }

    fn row() -> WeldingProfile {
        WeldingProfile {
            fillet_size_mm: dec!(4),
            welding_speed_cm_per_min: dec!(20),
            wire_weight_g_per_cm: dec!(0.6),
            base_cost_per_cm: dec!(40),
            price_per_cm: dec!(120),
            markup_multiplier: dec!(3),
        }
    }

    fn price(catalog: &CatalogSnapshot, inputs: &OrderInputs) -> (Decimal, QuoteTrace) {
        let ctx = QuoteContext::new(catalog, inputs);
        let mut trace = QuoteTrace::new();
        let cost = WeldingModule.price(&ctx, &mut trace).unwrap();
        (cost, trace)
    }

    #[test]
    fn test_physics_price() {
        let catalog = single_row_catalog(row());
        let settings = EconomicSettings::default();
        // 5 mm plate -> 3.5 mm fillet -> 4 mm tier; 40 cm at 20 cm/min = 2 min
        let inputs = OrderInputs::new("c", dec!(5), 1).with_welding(dec!(40));
        let (cost, trace) = price(&catalog, &inputs);

        let wire = dec!(0.6) * dec!(40) / dec!(1000) * dec!(1500);
        let per_minute = settings.welding_gas_cost_per_minute().unwrap()
            + settings.welder_per_minute_rate().unwrap()
            + settings.consumables_per_minute().unwrap();
        let expected = (wire + per_minute * dec!(2)) * dec!(3);
        assert_eq!(cost.round_dp(6), expected.round_dp(6));
        assert!(!trace.lines().iter().any(|l| l.is_warning()));
    }

    #[test]
    fn test_missing_wire_weight_uses_setting() {
        let mut no_wire = row();
        no_wire.wire_weight_g_per_cm = Decimal::ZERO;
        let mut explicit = row();
        explicit.wire_weight_g_per_cm = EconomicSettings::default().wire_consumption_g_per_cm;

        let inputs = OrderInputs::new("c", dec!(5), 2).with_welding(dec!(30));
        assert_eq!(
            price(&single_row_catalog(no_wire), &inputs).0,
            price(&single_row_catalog(explicit), &inputs).0
        );
    }

    #[test]
    fn test_no_profile_uses_legacy_rate() {
        let catalog = single_row_catalog(row());
        // 10 mm plate -> 7 mm fillet, above the only tier
        let inputs = OrderInputs::new("c", dec!(10), 2).with_welding(dec!(30));
        let (cost, trace) = price(&catalog, &inputs);
        assert_eq!(cost, dec!(3000));
        assert!(trace.lines()[0].is_warning());
    }

    #[test]
    fn test_zero_speed_prices_wire_only() {
        let mut stalled = row();
        stalled.welding_speed_cm_per_min = Decimal::ZERO;
        let catalog = single_row_catalog(stalled);
        let inputs = OrderInputs::new("c", dec!(5), 2).with_welding(dec!(40));
        let (cost, trace) = price(&catalog, &inputs);
        // 0.6 g/cm x 40 cm = 24 g at 1500/kg = 36, x3 markup, x2 parts
        assert_eq!(cost.round_dp(6), dec!(216));
        assert!(trace.lines().iter().any(|l| l.message.contains(": 0 min")));
    }

    #[test]
    fn test_disabled_welding_is_zero() {
        let catalog = single_row_catalog(row());
        let inputs = OrderInputs::new("c", dec!(5), 2);
        assert_eq!(price(&catalog, &inputs).0, Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_linear_in_quantity(length_cm in 1u32..2_000, quantity in 1u32..500) {
            let catalog = CatalogSnapshot::seeded().unwrap();
            let length = Decimal::from(length_cm);
            let one = OrderInputs::new("c", dec!(5), 1).with_welding(length);
            let many = OrderInputs::new("c", dec!(5), quantity).with_welding(length);

            let single = price(&catalog, &one).0;
            let batch = price(&catalog, &many).0;
            prop_assert_eq!(batch.round_dp(6), (single * Decimal::from(quantity)).round_dp(6));
        }
    }
}
