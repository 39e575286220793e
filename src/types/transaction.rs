//! Transaction-related types for the sales analytics engine
//!
//! This module defines the record types that flow through the pipeline:
//! raw parsed records, validated records carrying a derived amount, and
//! catalog-enriched records.

use rust_decimal::Decimal;

/// A single sales transaction as parsed from the pipe-delimited input
///
/// All string fields are trimmed; the product name has literal commas
/// stripped. No business-rule validation has happened yet - that is the
/// validator's job. Fields are named and typed explicitly rather than
/// accessed through a generic mapping, so a malformed record can never
/// reach later stages with missing or mistyped fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Transaction identifier, expected to start with 'T' (e.g. "T1001")
    pub transaction_id: String,

    /// Date token, lexicographically sortable (e.g. "2024-01-15")
    ///
    /// Used both as identity and sort key. Deliberately kept as a string:
    /// the pipeline never does calendar arithmetic on it.
    pub date: String,

    /// Product identifier, expected to start with 'P' (e.g. "P101")
    pub product_id: String,

    /// Product display name, commas removed during parsing
    pub product_name: String,

    /// Units sold, must be positive to pass validation
    pub quantity: i64,

    /// Price per unit, must be positive to pass validation
    pub unit_price: Decimal,

    /// Customer identifier, expected to start with 'C' (e.g. "C501")
    pub customer_id: String,

    /// Sales region, must be non-empty to pass validation
    pub region: String,
}

/// A transaction that passed the validity predicate
///
/// Carries the same eight fields plus the derived transaction amount.
/// Only the validator constructs this type, so `amount` is always
/// `quantity x unit_price` and is never set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransaction {
    pub transaction_id: String,
    pub date: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub customer_id: String,
    pub region: String,

    /// Derived amount, exactly `quantity x unit_price`
    pub amount: Decimal,
}

impl ValidatedTransaction {
    /// Promote a raw record by attaching its derived amount
    ///
    /// The caller is expected to have checked the validity predicate first;
    /// this only performs the amount derivation.
    pub fn from_record(record: TransactionRecord) -> Self {
        let amount = Decimal::from(record.quantity) * record.unit_price;
        ValidatedTransaction {
            transaction_id: record.transaction_id,
            date: record.date,
            product_id: record.product_id,
            product_name: record.product_name,
            quantity: record.quantity,
            unit_price: record.unit_price,
            customer_id: record.customer_id,
            region: record.region,
            amount,
        }
    }
}

/// A validated transaction augmented with product catalog attributes
///
/// The enrichment fields default to `None`/`false` and are only populated
/// when the catalog lookup succeeds. Absence is modeled as an explicit
/// `Option`, never as a missing field.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTransaction {
    /// The underlying validated transaction, unchanged by enrichment
    pub transaction: ValidatedTransaction,

    /// Product category from the catalog, if matched
    pub api_category: Option<String>,

    /// Product brand from the catalog, if matched
    pub api_brand: Option<String>,

    /// Product rating from the catalog, if matched
    pub api_rating: Option<f64>,

    /// Whether the catalog lookup succeeded for this record
    pub api_match: bool,
}

impl EnrichedTransaction {
    /// Create an enriched record with no catalog match
    pub fn unmatched(transaction: ValidatedTransaction) -> Self {
        EnrichedTransaction {
            transaction,
            api_category: None,
            api_brand: None,
            api_rating: None,
            api_match: false,
        }
    }
}
