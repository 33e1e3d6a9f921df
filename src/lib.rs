// ============================================================================
// Fabrication Quote Library
// Cost engine for laser cutting, press-brake bending and welding jobs
// ============================================================================

//! # Fabrication Quote
//!
//! A quoting engine for a metal-fabrication workshop: part geometry,
//! material and processes in, itemized price out.
//!
//! ## Features
//!
//! - **Tiered calibration tables** with binary-search ceiling lookup
//! - **Pluggable cost modules** (material, laser cutting, bending, welding)
//! - **Exact decimal arithmetic**, one rounding point per module into `Money`
//! - **Graceful fallbacks**: uncalibrated thicknesses price at a fallback
//!   rate and carry a warning in the trace instead of failing
//! - **Copy-on-write catalog** so engines always price against one snapshot
//!
//! ## Example
//!
//! ```rust
//! use fabrication_quote::prelude::*;
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//!
//! let catalog = Catalog::seeded().unwrap();
//! let engine = QuotationEngine::new(catalog.snapshot(), Arc::new(NoOpTraceSink));
//!
//! let steel = catalog.snapshot().find_material("Carbon steel (St3)").unwrap().clone();
//! let inputs = OrderInputs::new("ACME", dec!(3), 10)
//!     .with_blank(dec!(300), dec!(200))
//!     .with_material(steel)
//!     .with_cutting(dec!(1.2), 4)
//!     .with_bending(2, dec!(300));
//!
//! let quote = engine.quote_validated(&inputs).unwrap();
//! println!("Total: {}", quote.total);
//! println!("Operations: {}", quote.summary());
//!
//! let recorder = InMemoryOrderRecorder::new();
//! let record = recorder.persist_order(&quote, &inputs).unwrap();
//! assert_eq!(record.number, 1);
//! ```

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod recorder;

// Re-exports for convenience
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogSnapshot};
    pub use crate::domain::{
        BendingProfile, CatalogError, CuttingProfile, EconomicSettings, GasBottle, GasKind,
        MaterialKind, MaterialPriceTier, Operation, OrderId, OrderInputs, OrderRecord, Process,
        ProfileTable, QuoteBreakdown, Severity, TraceLine, ValidationError, WeldingProfile,
    };
    pub use crate::engine::{
        create_from_snapshot, create_seeded, BendingModule, CuttingModule, MaterialModule,
        QuotationEngine, QuotationEngineBuilder, QuoteError, WeldingModule,
    };
    pub use crate::interfaces::{
        CatalogSource, CostModule, LoggingTraceSink, NoOpTraceSink, OrderRecorder, QuoteContext,
        RecorderError, TraceSink,
    };
    pub use crate::numeric::{parse_decimal, Money};
    pub use crate::recorder::InMemoryOrderRecorder;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn seeded_engine(catalog: &Catalog) -> QuotationEngine {
        create_from_snapshot(catalog.snapshot(), Arc::new(NoOpTraceSink)).unwrap()
    }

    fn black_steel(catalog: &Catalog) -> MaterialKind {
        catalog
            .snapshot()
            .find_material("Carbon steel (St3)")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_end_to_end_quote_and_record() {
        let catalog = Catalog::seeded().unwrap();
        let engine = seeded_engine(&catalog);
        let recorder = InMemoryOrderRecorder::new();

        // Operator typed measurements with comma decimals
        let thickness = parse_decimal("2,0").unwrap();
        let inputs = OrderInputs::new("Workshop client", thickness, 5)
            .with_blank(dec!(200), parse_decimal(" 100 ").unwrap())
            .with_material(black_steel(&catalog))
            .with_cutting(parse_decimal("0,6").unwrap(), 2)
            .with_bending(2, dec!(200))
            .with_welding(dec!(30));

        let quote = engine.quote_validated(&inputs).unwrap();
        assert!(quote.total.is_positive());
        assert!(!quote.has_warnings());
        assert_eq!(
            quote.fired_processes(),
            vec![Process::Material, Process::Cutting, Process::Bending, Process::Welding]
        );
        // 200 x 100 x 2 mm of steel is 0.314 kg
        assert_eq!(
            quote.summary(),
            "Metal(0.3kg x 5) + Laser + Bend(2x) + Weld(30cm)"
        );

        let record = recorder.persist_order(&quote, &inputs).unwrap();
        assert_eq!(record.description, "5 pcs / 2 mm");
        assert_eq!(record.total_price, quote.total.round_to_units().unwrap());
        assert_eq!(record.operations, quote.summary());

        let history = recorder.list_recent_default();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, record.id);
    }

    #[test]
    fn test_thickness_beyond_calibration() {
        let catalog = Catalog::seeded().unwrap();
        let engine = seeded_engine(&catalog);
        let inputs = OrderInputs::new("c", dec!(999), 1).with_cutting(dec!(1), 1);

        let quote = engine.compute_quote(&inputs).unwrap();
        assert!(quote.cutting_cost.is_positive());
        assert!(quote.has_warnings());
        assert_eq!(quote.warnings().next().unwrap().process, Process::Cutting);
    }

    #[test]
    fn test_bend_beyond_machine_limit_still_quotes() {
        let catalog = Catalog::seeded().unwrap();
        let engine = seeded_engine(&catalog);
        let short = OrderInputs::new("c", dec!(2), 1).with_bending(1, dec!(5000));
        let long = OrderInputs::new("c", dec!(2), 1).with_bending(1, dec!(6200));

        let short_quote = engine.compute_quote(&short).unwrap();
        let long_quote = engine.compute_quote(&long).unwrap();
        assert_eq!(long_quote.bending_cost, short_quote.bending_cost);
        assert!(long_quote.has_warnings());
        assert!(!short_quote.has_warnings());
    }

    #[test]
    fn test_minimum_charge_floor() {
        let catalog = Catalog::seeded().unwrap();
        let settings = EconomicSettings::default().with_cutting_policy(dec!(10000), Decimal::ZERO);
        catalog.update_settings(settings).unwrap();
        let engine = seeded_engine(&catalog);

        let inputs = OrderInputs::new("c", dec!(1), 3).with_cutting(dec!(0.5), 0);
        let quote = engine.compute_quote(&inputs).unwrap();
        assert_eq!(quote.cutting_cost, Money::from_integer(10000).unwrap());
    }

    #[test]
    fn test_engine_keeps_its_snapshot_across_edits() {
        let catalog = Catalog::seeded().unwrap();
        let engine = seeded_engine(&catalog);
        let inputs = OrderInputs::new("c", dec!(3), 2).with_cutting(dec!(4), 2);
        let before = engine.compute_quote(&inputs).unwrap();

        let settings = EconomicSettings {
            electricity_price_per_kwh: dec!(100),
            ..EconomicSettings::default()
        };
        catalog.update_settings(settings).unwrap();

        assert_eq!(engine.compute_quote(&inputs).unwrap(), before);
        let repriced = seeded_engine(&catalog).compute_quote(&inputs).unwrap();
        assert!(repriced.cutting_cost > before.cutting_cost);
    }

    #[test]
    fn test_bending_setup_independent_of_quantity() {
        let catalog = Catalog::seeded().unwrap();
        let engine = seeded_engine(&catalog);
        let one = OrderInputs::new("c", dec!(4), 1).with_bending(1, dec!(1000));
        let hundred = OrderInputs::new("c", dec!(4), 100).with_bending(1, dec!(1000));

        // 4 mm tier: 250 per bend, setup 3000
        let per_bend = Money::from_integer(250).unwrap();
        let setup_one = engine
            .compute_quote(&one)
            .unwrap()
            .bending_cost
            .checked_sub(per_bend)
            .unwrap();
        let setup_hundred = engine
            .compute_quote(&hundred)
            .unwrap()
            .bending_cost
            .checked_sub(per_bend.checked_mul_int(100).unwrap())
            .unwrap();
        assert_eq!(setup_one, setup_hundred);
        assert_eq!(setup_one, Money::from_integer(3000).unwrap());
    }

    #[test]
    fn test_uncalibrated_catalog_prices_through_fallbacks() {
        let catalog = Catalog::default();
        let engine = seeded_engine(&catalog);
        let inputs = OrderInputs::new("c", dec!(2), 2)
            .with_cutting(dec!(1), 0)
            .with_bending(3, dec!(800))
            .with_welding(dec!(10));

        let quote = engine.compute_quote(&inputs).unwrap();
        assert!(quote.cutting_cost.is_zero());
        // 500 per bend x 3 x 2, 50 per cm x 10 x 2
        assert_eq!(quote.bending_cost, Money::from_integer(3000).unwrap());
        assert_eq!(quote.welding_cost, Money::from_integer(1000).unwrap());
        assert_eq!(quote.warnings().count(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_catalog_document_drives_engine() {
        let document = CatalogSnapshot::seeded().unwrap().to_json().unwrap();
        let snapshot = CatalogSnapshot::from_json(&document).unwrap();
        let catalog = Catalog::new(snapshot);
        let engine = seeded_engine(&catalog);
        let reference = create_seeded(Arc::new(NoOpTraceSink)).unwrap();

        let inputs = OrderInputs::new("c", dec!(6), 4)
            .with_cutting(dec!(2.5), 3)
            .with_welding(dec!(25));
        assert_eq!(
            engine.compute_quote(&inputs).unwrap(),
            reference.compute_quote(&inputs).unwrap()
        );
    }
}
