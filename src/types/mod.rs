//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: transaction records at each pipeline stage
//! - `catalog`: external product catalog entries and lookup mapping
//! - `error`: error types for the analytics engine

pub mod catalog;
pub mod error;
pub mod transaction;

pub use catalog::{CatalogEntry, CatalogProduct, ProductMapping};
pub use error::AnalyticsError;
pub use transaction::{EnrichedTransaction, TransactionRecord, ValidatedTransaction};
