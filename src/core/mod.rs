//! Core business logic module
//!
//! The pipeline stages, leaves first:
//! - `parser` - raw lines to transaction records
//! - `validator` - validity predicate, amount derivation, filtering
//! - `grouping` - insertion-ordered grouping support
//! - `aggregate` - the seven read-only aggregation operations
//! - `enrich` - catalog cross-referencing
//! - `report` - text report synthesis
//! - `engine` - run orchestration

pub mod aggregate;
pub mod engine;
pub mod enrich;
pub mod grouping;
pub mod parser;
pub mod report;
pub mod validator;

pub use aggregate::{
    customer_analysis, daily_sales_trend, find_peak_sales_day, low_performing_products,
    region_wise_sales, top_selling_products, total_revenue,
};
pub use engine::{AnalyticsPipeline, PipelineConfig, PipelineOutcome};
pub use enrich::{enrich_transactions, EnrichmentStats};
pub use parser::parse_transactions;
pub use report::generate_report;
pub use validator::{validate_and_filter, FilterOutcome, FilterParams, FilterSummary};
