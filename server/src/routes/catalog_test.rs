use super::*;

#[tokio::test]
async fn list_symbols_returns_full_catalog() {
    let Json(symbols) = list_symbols().await;
    assert_eq!(symbols, catalog::symbol_catalog());
    assert!(!symbols.is_empty());
}

#[tokio::test]
async fn list_locations_returns_full_catalog() {
    let Json(locations) = list_locations().await;
    assert_eq!(locations, catalog::location_catalog());
    assert!(!locations.is_empty());
}
