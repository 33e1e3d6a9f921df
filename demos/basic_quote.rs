// ============================================================================
// Basic Quote Example
// ============================================================================

use fabrication_quote::prelude::*;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    fabrication_quote::logging::init();

    println!("=== Fabrication Quote Example ===\n");

    let catalog = Catalog::seeded().expect("seed catalog is valid");
    let engine = QuotationEngineBuilder::new(catalog.snapshot())
        .with_logging()
        .build();

    println!("Catalog version {}", catalog.version());
    for material in catalog.snapshot().list_materials() {
        println!("  {} ({} g/cm³)", material.name, material.density_g_cm3);
    }
    println!();

    let steel = catalog
        .snapshot()
        .find_material("Carbon steel (St3)")
        .expect("seeded material")
        .clone();

    // Bracket: 3 mm plate, 10 pieces, cut, bent twice, short weld seam
    let thickness = parse_decimal("3,0").expect("valid number");
    let inputs = OrderInputs::new("ACME Brackets", thickness, 10)
        .with_blank(dec!(300), dec!(200))
        .with_material(steel)
        .with_cutting(dec!(1.2), 4)
        .with_bending(2, dec!(300))
        .with_welding(dec!(15));

    let quote = match engine.quote_validated(&inputs) {
        Ok(quote) => quote,
        Err(err) => {
            eprintln!("Quote rejected: {}", err);
            return;
        }
    };

    println!("Material: {}", quote.material_cost);
    println!("Cutting:  {}", quote.cutting_cost);
    println!("Bending:  {}", quote.bending_cost);
    println!("Welding:  {}", quote.welding_cost);
    println!("Total:    {}\n", quote.total);

    println!("Trace:");
    for line in &quote.trace {
        println!("  {}", line);
    }
    println!();

    // Plate thicker than anything calibrated still gets a price
    let thick = OrderInputs::new("ACME Base plates", dec!(50), 2).with_cutting(dec!(2.4), 2);
    if let Ok(thick_quote) = engine.compute_quote(&thick) {
        println!("50 mm plate cutting: {}", thick_quote.cutting_cost);
        for warning in thick_quote.warnings() {
            println!("  {}", warning);
        }
        println!();
    }

    let recorder = InMemoryOrderRecorder::new();
    match recorder.persist_order(&quote, &inputs) {
        Ok(record) => println!(
            "Recorded order #{} for {}: {} ({}) = {}",
            record.number, record.client_name, record.description, record.operations, record.total_price
        ),
        Err(err) => eprintln!("Not recorded: {}", err),
    }

    // Raise electricity price; new engines see it, the existing one does not
    let settings = EconomicSettings {
        electricity_price_per_kwh: dec!(40),
        ..catalog.snapshot().settings().clone()
    };
    if catalog.update_settings(settings).is_ok() {
        let repriced = QuotationEngine::new(catalog.snapshot(), Arc::new(NoOpTraceSink))
            .compute_quote(&inputs)
            .map(|q| q.total);
        println!("\nAfter electricity change (v{}): {:?}", catalog.version(), repriced);
    }
}
