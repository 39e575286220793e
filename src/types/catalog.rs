//! Product catalog types
//!
//! The external catalog arrives as a JSON document of product entries.
//! `ProductMapping` is the read-only lookup structure the enricher uses,
//! keyed by the numeric catalog id.

use serde::Deserialize;
use std::collections::HashMap;

/// A single product entry as fetched from the external catalog
///
/// All fields except the id are optional in the wire format; entries
/// without an id are skipped when building the mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogProduct {
    pub id: Option<u32>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub rating: Option<f64>,
}

/// Catalog attributes kept per product id
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub title: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub rating: Option<f64>,
}

/// Read-only mapping from numeric catalog id to product attributes
///
/// Built once from the fetched catalog and never mutated during
/// enrichment.
#[derive(Debug, Clone, Default)]
pub struct ProductMapping {
    entries: HashMap<u32, CatalogEntry>,
}

impl ProductMapping {
    /// Build the mapping from fetched catalog entries
    ///
    /// Entries without an id are skipped. A duplicate id keeps the last
    /// entry seen, matching plain map insertion semantics.
    pub fn from_products(products: Vec<CatalogProduct>) -> Self {
        let mut entries = HashMap::new();
        for product in products {
            let Some(id) = product.id else {
                continue;
            };
            entries.insert(
                id,
                CatalogEntry {
                    title: product.title,
                    category: product.category,
                    brand: product.brand,
                    rating: product.rating,
                },
            );
        }
        ProductMapping { entries }
    }

    /// Look up a product by its numeric catalog id
    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
