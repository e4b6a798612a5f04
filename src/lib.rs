//! Umbrella crate for the dealermap workspace.
//!
//! Re-exports [`dealermap_core`] so the demos under `demos/` can be run from
//! the workspace root with `cargo run --example <name>`.
pub use dealermap_core::*;
