//! Product catalog loader
//!
//! Parses the externally fetched product catalog document. The wire
//! shape is the payload of the catalog service: an object with a
//! `products` array. A bare array of products is also accepted so a
//! pre-extracted document works too.
//!
//! Contract: on any read or parse failure the loader logs the problem
//! and returns an empty sequence - a missing catalog degrades the run
//! (everything ends up unmatched) but never aborts it.

use crate::types::{AnalyticsError, CatalogProduct};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Catalog service payload: `{"products": [...], ...}`
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<CatalogProduct>,
}

/// Load catalog products from a JSON document on disk
///
/// Returns an empty vector on any failure.
pub fn load_catalog(path: &Path) -> Vec<CatalogProduct> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read catalog '{}': {}", path.display(), e);
            return Vec::new();
        }
    };

    parse_catalog(&content).unwrap_or_else(|e| {
        eprintln!("Failed to parse catalog '{}': {}", path.display(), e);
        Vec::new()
    })
}

/// Parse a catalog document, accepting the service payload shape or a
/// bare product array
fn parse_catalog(content: &str) -> Result<Vec<CatalogProduct>, AnalyticsError> {
    match serde_json::from_str::<CatalogDocument>(content) {
        Ok(document) => Ok(document.products),
        Err(_) => Ok(serde_json::from_str::<Vec<CatalogProduct>>(content)?),
    }
}
