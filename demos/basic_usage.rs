//! Basic usage example for dealermap-rs
//!
//! This example demonstrates how to:
//! - Load the bundled dealer catalog
//! - List cities and dealers
//! - Run a search and read back the viewport command

use dealermap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== dealermap-rs Basic Usage Example ===\n");

    println!("Loading dealer catalog...");
    let catalog = Catalog::load()?;
    println!("✓ Catalog loaded successfully\n");

    // Example 1: Counters shown above the map
    println!("--- Example 1: Catalog statistics ---");
    let stats = catalog.stats();
    println!("Toplam Bayi: {}", stats.dealers);
    println!("Şehir: {}", stats.cities);
    println!("Districts: {}\n", stats.districts);

    // Example 2: First few dealers in catalog order
    println!("--- Example 2: List dealers ---");
    for (i, d) in catalog.dealers().iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, d.name(), d.city());
    }
    println!("... and {} more\n", catalog.dealer_count().saturating_sub(5));

    // Example 3: A city search, case and diacritics do not matter
    println!("--- Example 3: Search 'istanbul' ---");
    let config = MapConfig::default();
    let frame = recompute(&catalog, "istanbul", &config);
    println!("Gösterilen Bayi: {} [{:?}]", frame.shown_dealers(), frame.tier());
    for d in frame.results.iter() {
        println!("- {} / {}", d.name(), d.district().unwrap_or("-"));
    }
    println!("Viewport: {:?}\n", frame.viewport);

    // Example 4: Keep the query in a Locator
    println!("--- Example 4: Typing into the search box ---");
    let mut locator = Locator::new(&catalog, config);
    for query in ["b", "bu", "bur", "bursa"] {
        let frame = locator.set_query(query);
        println!("'{query}' -> {} dealer(s)", frame.shown_dealers());
    }

    Ok(())
}
