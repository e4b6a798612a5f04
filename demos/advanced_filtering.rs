//! Advanced filtering example for dealermap-rs
//!
//! This example shows the two match tiers and the lower-level helpers

use dealermap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== dealermap-rs Advanced Filtering Example ===\n");

    let catalog = Catalog::load()?;

    // Example 1: Turkish folding
    println!("--- Example 1: Normalization ---");
    for s in ["İstanbul", "Şanlıurfa", "çorum", "Gaziantep"] {
        println!("  {s:<12} -> {}", normalize(s));
    }
    println!();

    // Example 2: City tier wins over names that also match
    println!("--- Example 2: 'istanbul' matches a city and a dealer name ---");
    let results = catalog.filter("istanbul");
    println!("  tier: {:?}, {} dealer(s)", results.tier(), results.len());
    let by_name = catalog.find_dealers_by_name_or_district("istanbul");
    println!("  name/district tier alone would give {} dealer(s)", by_name.len());
    println!();

    // Example 3: District and name fallback
    println!("--- Example 3: District / name fallback ---");
    for query in ["aksaray", "hırdavat", "TEKNIK"] {
        let results = catalog.filter(query);
        println!("  '{query}' [{:?}]", results.tier());
        for d in results.iter() {
            println!("    - {} ({})", d.name(), d.city());
        }
    }
    println!();

    // Example 4: Districts of a city
    println!("--- Example 4: Districts of İzmir ---");
    for d in catalog.districts_for_city("izmir") {
        println!("  {}", d.district().unwrap_or("-"));
    }
    println!();

    // Example 5: Viewport for a single dealer versus many
    println!("--- Example 5: Viewport commands ---");
    let config = MapConfig::default();
    for query in ["trabzon", "ankara", ""] {
        let results = catalog.filter(query);
        let command = compute_viewport(&results, &config);
        println!("  '{query}' -> {command:?}");
    }

    Ok(())
}
