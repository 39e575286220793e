//! Catalog enrichment
//!
//! Cross-references validated transactions against the external product
//! mapping. The join key is derived, not literal: a transaction's
//! `ProductID` carries a `P` prefix over the numeric catalog id
//! (`P101` joins catalog id `101`).
//!
//! Enrichment is total and order-preserving: every input record yields
//! exactly one output record in the same position. The two anticipated
//! failure modes - a non-numeric remainder after stripping the prefix,
//! and an id absent from the mapping - produce the unmatched outcome
//! explicitly. There is no blanket catch here; anything else would be a
//! programming error and should surface.

use crate::types::{EnrichedTransaction, ProductMapping, ValidatedTransaction};

/// Match statistics from an enrichment pass
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentStats {
    /// Records with a successful catalog match
    pub matched: usize,

    /// Total records processed (always equals the input length)
    pub total: usize,

    /// `matched / total x 100`; 0.0 for empty input
    pub success_rate: f64,
}

impl EnrichmentStats {
    fn new(matched: usize, total: usize) -> Self {
        let success_rate = if total == 0 {
            0.0
        } else {
            matched as f64 / total as f64 * 100.0
        };
        EnrichmentStats {
            matched,
            total,
            success_rate,
        }
    }
}

/// Derive the numeric catalog id from a product identifier
///
/// Strips leading `P` characters and parses the remainder as an
/// integer. `None` for a non-numeric or empty remainder.
fn derive_catalog_id(product_id: &str) -> Option<u32> {
    product_id.trim_start_matches('P').parse::<u32>().ok()
}

/// Enrich transactions against the product mapping
///
/// Each record either gains the catalog category/brand/rating with
/// `api_match = true`, or passes through unmatched with all enrichment
/// fields `None` and `api_match = false`. Never errors.
pub fn enrich_transactions(
    transactions: &[ValidatedTransaction],
    mapping: &ProductMapping,
) -> (Vec<EnrichedTransaction>, EnrichmentStats) {
    let mut matched = 0usize;

    let enriched: Vec<EnrichedTransaction> = transactions
        .iter()
        .map(|tx| {
            let entry = derive_catalog_id(&tx.product_id).and_then(|id| mapping.get(id));
            match entry {
                Some(entry) => {
                    matched += 1;
                    EnrichedTransaction {
                        transaction: tx.clone(),
                        api_category: entry.category.clone(),
                        api_brand: entry.brand.clone(),
                        api_rating: entry.rating,
                        api_match: true,
                    }
                }
                None => EnrichedTransaction::unmatched(tx.clone()),
            }
        })
        .collect();

    let stats = EnrichmentStats::new(matched, enriched.len());
    (enriched, stats)
}
