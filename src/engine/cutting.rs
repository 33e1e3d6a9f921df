// ============================================================================
// Laser Cutting Cost Module
// Machine time, pierces, assist gas, minimum charge and heavy handling
// ============================================================================

use crate::domain::{CuttingProfile, Operation, Process, QuoteTrace};
use crate::interfaces::{CostModule, QuoteContext};
use crate::numeric::{checked_product, checked_total, guarded_div, NumericResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const SECONDS_PER_MINUTE: Decimal = dec!(60);
const MINUTES_PER_HOUR: Decimal = dec!(60);

/// Prices laser cutting of the batch.
///
/// Per part:
/// ```text
/// machine hour  = labor/h + power_kw(gas) x electricity + amortization/h
/// cut minutes   = length / speed
/// pierce minutes = pierces x pierce_seconds / 60
/// base          = (cut + pierce minutes) / 60 x machine hour
/// cutting price = base x (1 + markup%) + setup fee / quantity
///                 floored so that price x quantity >= minimum charge
/// per part      = cutting price + pierces x pierce price + heavy surcharge
/// ```
/// Batch cost is `quantity x per part`, plus oxygen for every cut minute
/// when the profile is oxidizing.
///
/// A thickness above the largest calibrated tier is priced with that tier's
/// rates and flagged with a warning.
pub struct CuttingModule;

impl CuttingModule {
    pub fn new() -> Self {
        Self
    }

    fn resolve_profile<'a>(
        ctx: &QuoteContext<'a>,
        trace: &mut QuoteTrace,
    ) -> Option<&'a CuttingProfile> {
        let thickness = ctx.inputs.thickness_mm;
        if let Some(profile) = ctx.catalog.find_cutting_profile(thickness) {
            return Some(profile);
        }

        match ctx.catalog.largest_cutting_profile() {
            Some(largest) => {
                tracing::warn!(
                    %thickness,
                    fallback_tier = %largest.thickness_mm,
                    "No calibrated cutting profile, using largest tier"
                );
                trace.warn(
                    Process::Cutting,
                    format!(
                        "no calibrated cutting profile for {} mm, used fallback rate of the {} mm tier",
                        thickness, largest.thickness_mm
                    ),
                );
                Some(largest)
            }
            None => {
                tracing::warn!(%thickness, "Cutting table is empty");
                trace.warn(Process::Cutting, "cutting table is empty, cutting not priced");
                None
            }
        }
    }
}

impl Default for CuttingModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CostModule for CuttingModule {
    fn process(&self) -> Process {
        Process::Cutting
    }

    fn name(&self) -> &str {
        "Cutting"
    }

    fn price(&self, ctx: &QuoteContext<'_>, trace: &mut QuoteTrace) -> NumericResult<Decimal> {
        let inputs = ctx.inputs;
        let settings = ctx.settings;

        if inputs.cutting_length_m <= Decimal::ZERO {
            trace.info(Process::Cutting, "no cutting");
            return Ok(Decimal::ZERO);
        }

        let Some(profile) = Self::resolve_profile(ctx, trace) else {
            return Ok(Decimal::ZERO);
        };

        let quantity = ctx.quantity();
        let divisor = inputs.amortization_divisor();
        let pierces = Decimal::from(inputs.pierce_count);
        let machine_hour = settings.machine_hourly_cost(profile.gas)?;

        let cut_minutes = guarded_div(inputs.cutting_length_m, profile.cutting_speed_m_per_min)?;
        let pierce_minutes = checked_product([pierces, settings.pierce_seconds])? / SECONDS_PER_MINUTE;
        let base = checked_product([
            checked_total([cut_minutes, pierce_minutes])? / MINUTES_PER_HOUR,
            machine_hour,
        ])?;

        let mut cutting_price = checked_total([
            checked_product([base, profile.markup_factor()])?,
            settings.laser_setup_fee_per_job / divisor,
        ])?;
        let floored = checked_product([cutting_price, quantity])? < settings.laser_min_charge_per_job;
        if floored {
            cutting_price = settings.laser_min_charge_per_job / divisor;
        }

        let pierce_price = checked_product([profile.pierce_price, pierces])?;
        let heavy = if settings.is_heavy(inputs.thickness_mm) {
            settings.heavy_handling_cost_per_detail
        } else {
            Decimal::ZERO
        };

        let oxygen = if profile.gas.is_oxidizing() {
            checked_product([settings.oxygen_cost_per_minute()?, cut_minutes, quantity])?
        } else {
            Decimal::ZERO
        };

        let per_part = checked_total([cutting_price, pierce_price, heavy])?;
        let cost = checked_total([checked_product([quantity, per_part])?, oxygen])?;

        trace.info(
            Process::Cutting,
            format!(
                "{} m at {} m/min ({} tier, {}): {} min, machine {}/h, markup {}%",
                inputs.cutting_length_m,
                profile.cutting_speed_m_per_min,
                profile.thickness_mm,
                profile.gas,
                cut_minutes.round_dp(2),
                machine_hour.round_dp(2),
                profile.markup_percent,
            ),
        );
        if inputs.pierce_count > 0 {
            trace.info(
                Process::Cutting,
                format!("{} pierces x {}", inputs.pierce_count, profile.pierce_price),
            );
        }
        if floored {
            trace.info(
                Process::Cutting,
                format!("minimum job charge {} applied", settings.laser_min_charge_per_job),
            );
        }
        if !oxygen.is_zero() {
            trace.info(Process::Cutting, format!("oxygen {}", oxygen.round_dp(2)));
        }
        if !heavy.is_zero() {
            trace.info(
                Process::Cutting,
                format!("heavy plate handling {} per part", heavy),
            );
        }
        trace.record_operation(Operation::Laser);

        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSnapshot;
    use crate::domain::{EconomicSettings, GasKind, OrderInputs};
    use proptest::prelude::*;

    fn pinned_settings() -> EconomicSettings {
        EconomicSettings::default().with_cutting_policy(Decimal::ZERO, Decimal::ZERO)
    }

    fn catalog_with(settings: EconomicSettings, rows: Vec<CuttingProfile>) -> CatalogSnapshot {
        CatalogSnapshot::new(settings, rows, Vec::new(), Vec::new(), Vec::new()).unwrap()
    }

    fn air_row() -> CuttingProfile {
        CuttingProfile::new(dec!(1.0), GasKind::Air, dec!(25), dec!(10), dec!(140))
    }

    fn price(catalog: &CatalogSnapshot, inputs: &OrderInputs) -> (Decimal, QuoteTrace) {
        let ctx = QuoteContext::new(catalog, inputs);
        let mut trace = QuoteTrace::new();
        let cost = CuttingModule.price(&ctx, &mut trace).unwrap();
        (cost, trace)
    }

    #[test]
    fn test_one_minute_air_cut() {
        // 300000/208 + 20 kW x 25 + 650 = 2592.3077/h; 1 min = 43.2051; x2.4 = 103.69
        let catalog = catalog_with(pinned_settings(), vec![air_row()]);
        let inputs = OrderInputs::new("c", dec!(1.0), 1).with_cutting(dec!(25), 0);
        let (cost, _) = price(&catalog, &inputs);
        assert_eq!(cost.round_dp(2), dec!(103.69));
    }

    #[test]
    fn test_no_length_is_zero() {
        let catalog = catalog_with(pinned_settings(), vec![air_row()]);
        let inputs = OrderInputs::new("c", dec!(1.0), 1).with_cutting(Decimal::ZERO, 4);
        assert_eq!(price(&catalog, &inputs).0, Decimal::ZERO);
    }

    #[test]
    fn test_fallback_to_largest_tier() {
        let catalog = CatalogSnapshot::seeded().unwrap();
        let inputs = OrderInputs::new("c", dec!(999), 1).with_cutting(dec!(2), 1);
        let (cost, trace) = price(&catalog, &inputs);
        assert!(cost > Decimal::ZERO);
        let warning = trace.lines().iter().find(|l| l.is_warning()).unwrap();
        assert!(warning.message.contains("fallback"));
        assert!(warning.message.contains("40"));
    }

    #[test]
    fn test_empty_table_warns() {
        let catalog = CatalogSnapshot::uncalibrated();
        let inputs = OrderInputs::new("c", dec!(3), 1).with_cutting(dec!(2), 1);
        let (cost, trace) = price(&catalog, &inputs);
        assert_eq!(cost, Decimal::ZERO);
        assert!(trace.lines()[0].is_warning());
    }

    #[test]
    fn test_minimum_charge_floor() {
        let settings = EconomicSettings::default().with_cutting_policy(dec!(10000), Decimal::ZERO);
        let catalog = catalog_with(settings, vec![air_row()]);
        let inputs = OrderInputs::new("c", dec!(1.0), 3).with_cutting(dec!(25), 0);
        let (cost, trace) = price(&catalog, &inputs);
        assert_eq!(cost, dec!(10000));
        assert!(trace.lines().iter().any(|l| l.message.contains("minimum job charge")));
    }

    #[test]
    fn test_setup_fee_amortized_over_batch() {
        let settings = EconomicSettings::default().with_cutting_policy(Decimal::ZERO, dec!(500));
        let catalog = catalog_with(settings, vec![air_row()]);
        let single = OrderInputs::new("c", dec!(1.0), 1).with_cutting(dec!(25), 0);
        let batch = OrderInputs::new("c", dec!(1.0), 10).with_cutting(dec!(25), 0);
        let single_cost = price(&catalog, &single).0;
        let batch_cost = price(&catalog, &batch).0;
        // The fee is charged once per job either way
        assert_eq!(
            (batch_cost - single_cost * dec!(10)).round_dp(6),
            (dec!(500) - dec!(5000)).round_dp(6)
        );
    }

    #[test]
    fn test_oxygen_surcharge() {
        // Same speed, same machine hour: the oxygen cut pays for gas on top
        let settings = pinned_settings();
        let mut settings_equal_power = settings.clone();
        settings_equal_power.compressor_power_oxygen_kw = settings.compressor_power_air_kw;

        let air = catalog_with(
            settings_equal_power.clone(),
            vec![CuttingProfile::new(dec!(12), GasKind::Air, dec!(1.8), dec!(110), dec!(40))],
        );
        let oxygen = catalog_with(
            settings_equal_power,
            vec![CuttingProfile::new(dec!(12), GasKind::Oxygen, dec!(1.8), dec!(110), dec!(40))],
        );
        let inputs = OrderInputs::new("c", dec!(12), 2).with_cutting(dec!(3.6), 0);

        let air_cost = price(&air, &inputs).0;
        let oxygen_cost = price(&oxygen, &inputs).0;
        // 3.6 m / 1.8 = 2 min per part x 2 parts x 7.5/min (3000 / 400 min)
        assert_eq!(oxygen_cost - air_cost, dec!(30));
    }

    #[test]
    fn test_heavy_surcharge_per_part() {
        let catalog = catalog_with(
            pinned_settings().with_heavy_handling(dec!(16), dec!(300)),
            vec![CuttingProfile::new(dec!(20), GasKind::Air, dec!(1), dec!(0), dec!(0))],
        );
        let light = OrderInputs::new("c", dec!(16), 5).with_cutting(dec!(1), 0);
        let heavy = OrderInputs::new("c", dec!(18), 5).with_cutting(dec!(1), 0);
        let surcharge = price(&catalog, &heavy).0 - price(&catalog, &light).0;
        assert_eq!(surcharge.round_dp(6), dec!(1500));
    }

    #[test]
    fn test_zero_speed_prices_pierces_and_minimum_only() {
        let settings = EconomicSettings::default().with_cutting_policy(dec!(800), Decimal::ZERO);
        let catalog = catalog_with(
            settings,
            vec![CuttingProfile::new(dec!(2), GasKind::Air, Decimal::ZERO, dec!(15), dec!(140))],
        );
        let inputs = OrderInputs::new("c", dec!(2), 4).with_cutting(dec!(3), 2);
        let (cost, trace) = price(&catalog, &inputs);
        // No cut time; pierce time alone stays under the 800 minimum
        // 800 minimum + 4 parts x 2 pierces x 15
        assert_eq!(cost.round_dp(6), dec!(920));
        assert!(trace.lines().iter().any(|l| l.message.contains(": 0 min")));
    }

    #[test]
    fn test_tiny_speed_overflows_into_error() {
        let catalog = catalog_with(
            pinned_settings(),
            vec![CuttingProfile::new(
                dec!(2),
                GasKind::Air,
                dec!(0.0000000000000000000001),
                dec!(15),
                dec!(140),
            )],
        );
        let inputs = OrderInputs::new("c", dec!(2), 1000).with_cutting(dec!(1000000), 0);
        let ctx = QuoteContext::new(&catalog, &inputs);
        let mut trace = QuoteTrace::new();
        assert_eq!(
            CuttingModule.price(&ctx, &mut trace),
            Err(crate::numeric::NumericError::Overflow)
        );
    }

    proptest! {
        #[test]
        fn prop_monotonic_in_length_and_pierces(
            length_cm in 1u32..100_000,
            extra_cm in 0u32..10_000,
            pierces in 0u32..500,
            extra_pierces in 0u32..50,
            quantity in 1u32..200,
        ) {
            let catalog = CatalogSnapshot::seeded().unwrap();
            let length = Decimal::new(i64::from(length_cm), 2);
            let longer = Decimal::new(i64::from(length_cm + extra_cm), 2);

            let base = OrderInputs::new("c", dec!(3), quantity).with_cutting(length, pierces);
            let more_length = OrderInputs::new("c", dec!(3), quantity).with_cutting(longer, pierces);
            let more_pierces =
                OrderInputs::new("c", dec!(3), quantity).with_cutting(length, pierces + extra_pierces);

            let base_cost = price(&catalog, &base).0;
            prop_assert!(base_cost >= Decimal::ZERO);
            prop_assert!(price(&catalog, &more_length).0 >= base_cost);
            prop_assert!(price(&catalog, &more_pierces).0 >= base_cost);
        }

        #[test]
        fn prop_floor_law(
            length_cm in 1u32..5_000,
            quantity in 1u32..50,
            min_charge in 0u32..50_000,
        ) {
            let settings = EconomicSettings::default()
                .with_cutting_policy(Decimal::from(min_charge), Decimal::ZERO);
            let catalog = catalog_with(settings, vec![air_row()]);
            let inputs = OrderInputs::new("c", dec!(1), quantity)
                .with_cutting(Decimal::new(i64::from(length_cm), 2), 0);
            // No pierces, no heavy plate, air: cost is cutting price x quantity
            let cost = price(&catalog, &inputs).0;
            prop_assert!(cost.round_dp(6) >= Decimal::from(min_charge));
        }
    }
}
