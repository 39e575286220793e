//! Sales Analytics Engine Library
//! # Overview
//!
//! A batch analytics pipeline over pipe-delimited sales transaction
//! records: parse, validate and filter, aggregate, enrich against an
//! external product catalog, and render a structured text report.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (transaction records, catalog entries, errors)
//! - [`cli`] - CLI argument parsing and the interactive filter prompt
//! - [`core`] - Business logic components:
//!   - [`core::parser`] - raw line parsing
//!   - [`core::validator`] - validity predicate and filtering
//!   - [`core::aggregate`] - the seven aggregation operations
//!   - [`core::enrich`] - catalog enrichment
//!   - [`core::report`] - report synthesis
//!   - [`core::engine`] - pipeline orchestration
//! - [`io`] - Collaborator I/O (line loader, catalog loader, enriched writer)
//!
//! # Pipeline
//!
//! Data flow is linear with one fan-out/fan-in: the validated set feeds
//! both the aggregations and the enricher, and the report consumes the
//! outputs of both branches. Every run reprocesses the full input in
//! memory; no state survives between runs.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{
    enrich_transactions, generate_report, parse_transactions, validate_and_filter,
    AnalyticsPipeline, EnrichmentStats, FilterParams, FilterSummary, PipelineConfig,
    PipelineOutcome,
};
pub use types::{
    AnalyticsError, CatalogProduct, EnrichedTransaction, ProductMapping, TransactionRecord,
    ValidatedTransaction,
};
