//! Catalog routes — symbol and location pickers load these once per session.

use axum::response::Json;

use reports::{Location, Symbol};

use crate::services::catalog;

/// `GET /api/catalog/symbols` — ordered symbol catalog.
pub async fn list_symbols() -> Json<Vec<Symbol>> {
    Json(catalog::symbol_catalog())
}

/// `GET /api/catalog/locations` — ordered location catalog.
pub async fn list_locations() -> Json<Vec<Location>> {
    Json(catalog::location_catalog())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
