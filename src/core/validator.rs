//! Transaction validation and filtering
//!
//! Applies the business validity predicate, derives the transaction
//! amount for the records that pass, then applies the optional
//! region/amount filters sequentially.
//!
//! The summary deliberately mixes two views: the region set and amount
//! range describe the UNFILTERED valid set, while the removal counts
//! describe the sequential filter application. Downstream reporting
//! relies on that asymmetry (the range is shown to the user as filter
//! guidance before any filter narrows the data).

use crate::types::{TransactionRecord, ValidatedTransaction};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Optional filter parameters supplied by the caller
///
/// All bounds are inclusive; `region` is an exact match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    pub region: Option<String>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

impl FilterParams {
    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.min_amount.is_none() && self.max_amount.is_none()
    }
}

/// Counters and observations produced by a validation/filter pass
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSummary {
    /// Number of records fed into validation
    pub total_input: usize,

    /// Records that failed the validity predicate
    pub invalid: usize,

    /// Valid records removed by the region filter
    pub filtered_by_region: usize,

    /// Valid records removed by the min/max amount filters combined
    pub filtered_by_amount: usize,

    /// Records remaining after validation and all filters
    pub final_count: usize,

    /// Distinct regions observed across ALL valid records, pre-filter
    pub regions: BTreeSet<String>,

    /// (min, max) amount across ALL valid records, pre-filter; None when
    /// no record passed validation
    pub amount_range: Option<(Decimal, Decimal)>,
}

/// Result of validating and filtering a batch of records
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub transactions: Vec<ValidatedTransaction>,
    pub summary: FilterSummary,
}

/// The business validity predicate
///
/// A record is valid when the quantity and unit price are positive, the
/// three identifiers carry their expected prefixes, and the region is
/// non-empty. With typed records there is no "missing field" failure
/// mode; a record that reaches this point always has every field.
fn is_valid(record: &TransactionRecord) -> bool {
    record.quantity > 0
        && record.unit_price > Decimal::ZERO
        && record.transaction_id.starts_with('T')
        && record.product_id.starts_with('P')
        && record.customer_id.starts_with('C')
        && !record.region.is_empty()
}

/// Validate records, derive amounts, and apply the optional filters
///
/// Invalid records are counted and dropped. The distinct region set and
/// the amount range are accumulated over every valid record before any
/// filter is applied. Filters then run sequentially (region, then
/// minimum amount, then maximum amount), each over the survivors of the
/// previous one, with region and amount removals tracked separately.
pub fn validate_and_filter(
    records: Vec<TransactionRecord>,
    filter: &FilterParams,
) -> FilterOutcome {
    let total_input = records.len();
    let mut invalid = 0usize;
    let mut regions = BTreeSet::new();
    let mut amount_range: Option<(Decimal, Decimal)> = None;

    let mut valid: Vec<ValidatedTransaction> = Vec::with_capacity(records.len());
    for record in records {
        if !is_valid(&record) {
            invalid += 1;
            continue;
        }

        let tx = ValidatedTransaction::from_record(record);
        regions.insert(tx.region.clone());
        amount_range = Some(match amount_range {
            None => (tx.amount, tx.amount),
            Some((min, max)) => (min.min(tx.amount), max.max(tx.amount)),
        });
        valid.push(tx);
    }

    let mut filtered_by_region = 0usize;
    let mut filtered_by_amount = 0usize;

    if let Some(region) = &filter.region {
        let before = valid.len();
        valid.retain(|tx| &tx.region == region);
        filtered_by_region = before - valid.len();
    }

    if let Some(min_amount) = filter.min_amount {
        let before = valid.len();
        valid.retain(|tx| tx.amount >= min_amount);
        filtered_by_amount += before - valid.len();
    }

    if let Some(max_amount) = filter.max_amount {
        let before = valid.len();
        valid.retain(|tx| tx.amount <= max_amount);
        filtered_by_amount += before - valid.len();
    }

    let summary = FilterSummary {
        total_input,
        invalid,
        filtered_by_region,
        filtered_by_amount,
        final_count: valid.len(),
        regions,
        amount_range,
    };

    FilterOutcome {
        transactions: valid,
        summary,
    }
}
