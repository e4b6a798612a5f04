//! dealermap: command-line interface for dealermap-core
//!
//! This binary runs the dealer search from the terminal and prints what a
//! map front-end would receive: the matching dealers and the viewport
//! command.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ dealermap stats
//!
//! - Search (city first, then district/name)
//!   $ dealermap search istanbul
//!   $ dealermap search "aksaray" --json
//!
//! - Use a custom catalog and map config
//!   $ dealermap --input dealers.json --config map.json search bursa
//!
//! - Report dealers with a city missing from the city list
//!   $ dealermap check
//!
//! - Write a binary snapshot
//!   $ dealermap compile dealers.bin
//!
//! Data source
//! -----------
//!
//! By default the CLI loads `data/dealers.json` bundled with
//! `dealermap-core` without writing anything next to it. JSON inputs given
//! with `--input` get a binary snapshot cached beside them; `.bin` inputs are
//! read directly.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use dealermap_core::api::{DealerView, FrameView};
use dealermap_core::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let catalog = match args.input.map(PathBuf::from) {
        Some(path) => {
            let loaded = if path.extension().is_some_and(|e| e == "bin") {
                Catalog::load_from_path(&path)
            } else {
                Catalog::load_cached(&path)
            };
            loaded.with_context(|| format!("loading catalog from {}", path.display()))?
        }
        None => Catalog::load().context("loading bundled catalog")?,
    };
    tracing::debug!(dealers = catalog.dealer_count(), "catalog ready");

    let config = match &args.config {
        Some(path) => MapConfig::load_from_path(path)
            .with_context(|| format!("loading map config from {path}"))?,
        None => MapConfig::default(),
    };

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            println!("Catalog statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Districts: {}", stats.districts);
            println!("  Dealers: {}", stats.dealers);
        }

        Commands::Dealers => {
            for d in catalog.dealers() {
                print_dealer(d);
            }
        }

        Commands::Cities => {
            for c in catalog.cities() {
                println!("{} ({:.4}, {:.4})", c.name(), c.latitude, c.longitude);
            }
        }

        Commands::Districts { city } => {
            let districts: Vec<&District> = match &city {
                Some(city) => catalog.districts_for_city(city),
                None => catalog.districts().iter().collect(),
            };
            if districts.is_empty() {
                println!("No districts found");
            }
            for d in districts {
                println!("{} / {}", d.city(), d.district().unwrap_or("-"));
            }
        }

        Commands::Search { query, json } => {
            let frame = recompute(&catalog, &query, &config);
            if json {
                let view = FrameView::new(&frame);
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_frame(&frame);
            }
        }

        Commands::Check => {
            let orphans = catalog.unknown_dealer_cities();
            if orphans.is_empty() {
                println!("All {} dealers reference a known city.", catalog.dealer_count());
            } else {
                println!("{} dealer(s) reference an unknown city:", orphans.len());
                for d in orphans {
                    println!("- {} (city: {})", d.name(), d.city());
                }
            }
        }

        Commands::Compile { out } => {
            catalog
                .save_as(&out)
                .with_context(|| format!("writing snapshot to {out}"))?;
            println!("Wrote {} dealers to {out}", catalog.dealer_count());
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_dealer(d: &Dealer) {
    let view = DealerView(d);
    println!("{}: {}", d.name(), view.popup_lines().join(", "));
}

fn print_frame(frame: &Frame<'_>) {
    println!(
        "Showing {} of {} dealers ({} cities) [{:?}]",
        frame.shown_dealers(),
        frame.total_dealers,
        frame.city_count,
        frame.tier()
    );
    if frame.results.is_empty() {
        println!("No dealers found matching: {}", frame.results.term());
    }
    for d in frame.results.iter() {
        print_dealer(d);
    }
    match frame.viewport {
        ViewportCommand::FitBounds { bounds, padding } => println!(
            "Viewport: fit ({:.4}, {:.4}) – ({:.4}, {:.4}) padding {}x{}px",
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng,
            padding.x,
            padding.y
        ),
        ViewportCommand::SetView { center, zoom } => println!(
            "Viewport: center ({:.4}, {:.4}) zoom {}",
            center.lat, center.lng, zoom
        ),
    }
}
