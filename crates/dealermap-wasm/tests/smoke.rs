use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use dealermap_wasm::{get_city_count, get_dealer_count, search_names};

#[wasm_bindgen_test]
fn embedded_catalog_is_loaded() {
    #[cfg(target_arch = "wasm32")]
    dealermap_wasm::start().unwrap();

    assert!(get_dealer_count().unwrap() > 0, "expected dealers in embedded catalog");
    assert!(get_city_count().unwrap() > 0);
}

#[wasm_bindgen_test]
fn city_tier_wins() {
    #[cfg(target_arch = "wasm32")]
    dealermap_wasm::start().unwrap();

    let names = search_names("istanbul").unwrap();
    assert_eq!(names.length(), 3);
    let first = names.get(0).as_string();
    assert_eq!(first.as_deref(), Some("Karaköy Hırdavat"));
}

#[wasm_bindgen_test]
fn unknown_query_is_empty() {
    assert_eq!(search_names("qwerty").unwrap().length(), 0);
}
