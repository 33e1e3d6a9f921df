// ============================================================================
// Seed Catalog
// Workshop calibration shipped with a fresh installation
// ============================================================================

use crate::domain::{
    BendingProfile, CuttingProfile, GasKind, MaterialKind, MaterialPriceTier, WeldingProfile,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fiber-laser calibration: air up to 10 mm, oxygen from 12 mm.
/// Columns: thickness, gas, speed m/min, pierce price, markup %.
const CUTTING_ROWS: [(Decimal, GasKind, Decimal, Decimal, Decimal); 21] = [
    (dec!(0.5), GasKind::Air, dec!(25), dec!(10), dec!(150)),
    (dec!(1.0), GasKind::Air, dec!(25), dec!(20), dec!(140)),
    (dec!(1.5), GasKind::Air, dec!(20), dec!(30), dec!(130)),
    (dec!(2.0), GasKind::Air, dec!(20), dec!(40), dec!(120)),
    (dec!(3.0), GasKind::Air, dec!(20), dec!(50), dec!(110)),
    (dec!(4.0), GasKind::Air, dec!(18), dec!(60), dec!(100)),
    (dec!(5.0), GasKind::Air, dec!(17), dec!(70), dec!(90)),
    (dec!(6.0), GasKind::Air, dec!(12), dec!(80), dec!(80)),
    (dec!(8.0), GasKind::Air, dec!(9.4), dec!(90), dec!(70)),
    (dec!(10.0), GasKind::Air, dec!(6), dec!(100), dec!(60)),
    (dec!(12.0), GasKind::Oxygen, dec!(1.8), dec!(110), dec!(40)),
    (dec!(14.0), GasKind::Oxygen, dec!(1.7), dec!(120), dec!(40)),
    (dec!(16.0), GasKind::Oxygen, dec!(1.5), dec!(130), dec!(40)),
    (dec!(18.0), GasKind::Oxygen, dec!(1.25), dec!(140), dec!(40)),
    (dec!(20.0), GasKind::Oxygen, dec!(1.1), dec!(150), dec!(40)),
    (dec!(22.0), GasKind::Oxygen, dec!(1.1), dec!(160), dec!(40)),
    (dec!(25.0), GasKind::Oxygen, dec!(0.8), dec!(170), dec!(35)),
    (dec!(30.0), GasKind::Oxygen, dec!(0.5), dec!(180), dec!(35)),
    (dec!(32.0), GasKind::Oxygen, dec!(0.2), dec!(190), dec!(35)),
    (dec!(35.0), GasKind::Oxygen, dec!(0.2), dec!(200), dec!(35)),
    (dec!(40.0), GasKind::Oxygen, dec!(0.2), dec!(210), dec!(35)),
];

/// Press-brake calibration.
/// Columns: thickness, V-die, min flange, price ≤1.5 m, ≤3 m, ≤6 m, setup.
const BENDING_ROWS: [[Decimal; 7]; 14] = [
    [dec!(0.5), dec!(6), dec!(5), dec!(100), dec!(250), dec!(600), dec!(2000)],
    [dec!(1.0), dec!(8), dec!(6), dec!(100), dec!(250), dec!(600), dec!(2000)],
    [dec!(1.5), dec!(12), dec!(8), dec!(100), dec!(250), dec!(600), dec!(2000)],
    [dec!(2.0), dec!(16), dec!(11), dec!(120), dec!(300), dec!(700), dec!(2000)],
    [dec!(3.0), dec!(26), dec!(18), dec!(150), dec!(400), dec!(1000), dec!(2000)],
    [dec!(4.0), dec!(32), dec!(22), dec!(250), dec!(600), dec!(2000), dec!(3000)],
    [dec!(5.0), dec!(40), dec!(28), dec!(250), dec!(600), dec!(2000), dec!(3000)],
    [dec!(6.0), dec!(50), dec!(35), dec!(350), dec!(800), dec!(2500), dec!(3000)],
    [dec!(8.0), dec!(60), dec!(45), dec!(500), dec!(1200), dec!(4000), dec!(5000)],
    [dec!(10.0), dec!(80), dec!(55), dec!(800), dec!(2000), dec!(6000), dec!(8000)],
    [dec!(12.0), dec!(100), dec!(70), dec!(1200), dec!(3000), dec!(9000), dec!(10000)],
    [dec!(14.0), dec!(130), dec!(90), dec!(1500), dec!(4000), dec!(12000), dec!(12000)],
    [dec!(16.0), dec!(160), dec!(110), dec!(2000), dec!(5000), dec!(15000), dec!(15000)],
    [dec!(20.0), dec!(250), dec!(150), dec!(3500), dec!(8000), dec!(25000), dec!(20000)],
];

/// MIG fillet calibration.
/// Columns: fillet leg, speed cm/min, wire g/cm, reference cost/cm,
/// reference price/cm, markup multiplier.
const WELDING_ROWS: [[Decimal; 6]; 8] = [
    [dec!(2), dec!(30), dec!(0.16), dec!(25), dec!(75), dec!(3.0)],
    [dec!(3), dec!(25), dec!(0.35), dec!(32), dec!(96), dec!(3.0)],
    [dec!(4), dec!(20), dec!(0.63), dec!(42), dec!(126), dec!(3.0)],
    [dec!(5), dec!(16), dec!(0.98), dec!(55), dec!(165), dec!(3.0)],
    [dec!(6), dec!(13), dec!(1.41), dec!(70), dec!(175), dec!(2.5)],
    [dec!(8), dec!(11), dec!(2.51), dec!(90), dec!(225), dec!(2.5)],
    [dec!(10), dec!(9), dec!(3.93), dec!(118), dec!(295), dec!(2.5)],
    [dec!(12), dec!(8), dec!(5.65), dec!(145), dec!(363), dec!(2.5)],
];

pub fn cutting_profiles() -> Vec<CuttingProfile> {
    CUTTING_ROWS
        .iter()
        .map(|&(thickness, gas, speed, pierce, markup)| {
            CuttingProfile::new(thickness, gas, speed, pierce, markup)
        })
        .collect()
}

pub fn bending_profiles() -> Vec<BendingProfile> {
    BENDING_ROWS
        .iter()
        .map(|&[thickness, die, flange, p1500, p3000, p6000, setup]| BendingProfile {
            thickness_mm: thickness,
            die_size_mm: die,
            minimum_flange_mm: flange,
            price_up_to_1500: p1500,
            price_up_to_3000: p3000,
            price_up_to_6000: p6000,
            setup_fee: setup,
        })
        .collect()
}

pub fn welding_profiles() -> Vec<WeldingProfile> {
    WELDING_ROWS
        .iter()
        .map(|&[fillet, speed, wire, base, price, markup]| WeldingProfile {
            fillet_size_mm: fillet,
            welding_speed_cm_per_min: speed,
            wire_weight_g_per_cm: wire,
            base_cost_per_cm: base,
            price_per_cm: price,
            markup_multiplier: markup,
        })
        .collect()
}

pub fn materials() -> Vec<MaterialKind> {
    vec![
        MaterialKind::new("Carbon steel (St3)", dec!(7.85), dec!(355)).with_price_tiers(vec![
            MaterialPriceTier::new(dec!(12), dec!(355)),
            MaterialPriceTier::new(dec!(25), dec!(375)),
            MaterialPriceTier::new(dec!(1000), dec!(385)),
        ]),
        MaterialKind::new("Galvanized steel", dec!(7.85), dec!(450)),
        MaterialKind::new("Stainless steel (AISI 304)", dec!(7.9), dec!(2500)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProfileTable, Tiered};

    #[test]
    fn test_seed_tables_are_valid() {
        assert_eq!(ProfileTable::new(cutting_profiles()).unwrap().len(), 21);
        assert_eq!(ProfileTable::new(bending_profiles()).unwrap().len(), 14);
        assert_eq!(ProfileTable::new(welding_profiles()).unwrap().len(), 8);
        for material in materials() {
            material.validate().unwrap();
        }
    }

    #[test]
    fn test_gas_switches_at_twelve_mm() {
        for row in cutting_profiles() {
            assert_eq!(row.gas.is_oxidizing(), row.tier_key() >= dec!(12));
        }
    }
}
