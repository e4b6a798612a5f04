//! Error handling example for dealermap-rs
//!
//! This example demonstrates load failures and the search edge cases

use dealermap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== dealermap-rs Error Handling Example ===\n");

    // Example 1: Handling catalog load errors
    println!("--- Example 1: Loading catalog with error handling ---");
    match Catalog::load_from_path("does/not/exist.json") {
        Ok(catalog) => println!("✓ Loaded {} dealers", catalog.dealer_count()),
        Err(e) => println!("✗ Failed to load catalog: {e}"),
    }
    println!();

    // Example 2: Malformed catalogs are rejected, not repaired
    println!("--- Example 2: Rejecting malformed catalogs ---");
    let broken = [
        r#"{"cities": [], "districts": []}"#,
        r#"{"cities": [], "districts": [], "dealers": [
            {"city": "BURSA", "name": "X", "latitude": "40.1", "longitude": 29.0}
        ]}"#,
        r#"{"cities": [], "districts": [], "dealers": [
            {"city": "BURSA", "name": "X", "latitude": 140.0, "longitude": 29.0}
        ]}"#,
    ];
    for json in broken {
        match Catalog::from_json_str(json) {
            Ok(_) => println!("  unexpectedly accepted"),
            Err(e) => println!("  rejected: {e}"),
        }
    }
    println!();

    let catalog = Catalog::load()?;
    let config = MapConfig::default();

    // Example 3: No match falls back to the default view
    println!("--- Example 3: Query with no match ---");
    let frame = recompute(&catalog, "qwerty", &config);
    println!("  shown: {}", frame.shown_dealers());
    println!("  viewport: {:?}", frame.viewport);
    println!();

    // Example 4: Blank queries show everything
    println!("--- Example 4: Whitespace-only query ---");
    let frame = recompute(&catalog, "   ", &config);
    println!(
        "  shown {} of {} [{:?}]",
        frame.shown_dealers(),
        frame.total_dealers,
        frame.tier()
    );
    println!();

    // Example 5: Dealers whose city is not in the city list
    println!("--- Example 5: Referential check ---");
    let orphans = catalog.unknown_dealer_cities();
    if orphans.is_empty() {
        println!("  all dealers reference a known city");
    }
    for d in orphans {
        println!("  {} -> unknown city {}", d.name(), d.city());
    }

    Ok(())
}
