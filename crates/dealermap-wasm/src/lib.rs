//! dealermap-wasm: WebAssembly bindings for dealermap-core
//!
//! Exposes the dealer search to a browser map page. The bundled catalog is
//! embedded in the WASM binary and parsed once on module start.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Counters: `get_dealer_count()`, `get_city_count()`
//! - `search(query)`: one full frame (dealers, viewport command, counters)
//! - `get_map_config()`: static rendering constants (zoom clamp, outer
//!   bounds, marker icon, fallback view)
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search, get_map_config } from 'dealermap-wasm';
//!
//! async function main() {
//!   await init();
//!   const config = get_map_config();
//!   input.addEventListener('input', (e) => {
//!     const frame = search(e.target.value);
//!     drawMarkers(frame.dealers);
//!     if (frame.viewport.kind === 'fit_bounds') {
//!       map.fitBounds(frame.viewport.bounds, frame.viewport.padding);
//!     } else {
//!       map.setView(frame.viewport.center, frame.viewport.zoom);
//!     }
//!   });
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Every call to `search` recomputes from scratch; the page should apply
//!   the returned viewport unconditionally.
//! - To ship a different catalog, replace `data/dealers.json` in
//!   `dealermap-core` and rebuild.
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use dealermap_core::api::FrameView;
use dealermap_core::{recompute, Catalog, DealerSearch, MapConfig};
use serde_wasm_bindgen::to_value;

// 1. Embed the catalog
static EMBEDDED_CATALOG: &str = include_str!("../../dealermap-core/data/dealers.json");

// 2. Static Instance
static CATALOG: OnceLock<Result<Catalog, String>> = OnceLock::new();
static CONFIG: OnceLock<MapConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log(msg: &str) {
    tracing::info!("{msg}");
}

#[cfg(target_arch = "wasm32")]
fn log_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_error(msg: &str) {
    tracing::error!("{msg}");
}

fn catalog() -> Result<&'static Catalog, JsValue> {
    CATALOG
        .get_or_init(|| {
            let catalog = Catalog::from_json_str(EMBEDDED_CATALOG).map_err(|e| {
                let msg = format!("embedded catalog rejected: {e}");
                log_error(&msg);
                msg
            })?;
            let stats = catalog.stats();
            log(&format!(
                "✓ Loaded {} dealers in {} cities",
                stats.dealers, stats.cities
            ));
            Ok(catalog)
        })
        .as_ref()
        .map_err(|msg| JsValue::from_str(msg))
}

fn config() -> &'static MapConfig {
    CONFIG.get_or_init(MapConfig::default)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    log("Initializing dealermap WASM module...");
    catalog().map(|_| ())
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_dealer_count() -> Result<usize, JsValue> {
    Ok(catalog()?.dealer_count())
}

#[wasm_bindgen]
pub fn get_city_count() -> Result<usize, JsValue> {
    Ok(catalog()?.city_count())
}

/* --------------------------------------------------------------------------
   Search (filter + viewport)
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search(query: &str) -> Result<JsValue, JsValue> {
    let frame = recompute(catalog()?, query, config());
    to_value(&FrameView::new(&frame)).map_err(JsValue::from)
}

/// Names of the dealers a query would show, in display order.
#[wasm_bindgen]
pub fn search_names(query: &str) -> Result<js_sys::Array, JsValue> {
    let array = js_sys::Array::new();
    for d in catalog()?.filter(query) {
        array.push(&JsValue::from_str(d.name()));
    }
    Ok(array)
}

/* --------------------------------------------------------------------------
   Rendering constants
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_map_config() -> Result<JsValue, JsValue> {
    to_value(config()).map_err(JsValue::from)
}
