//! I/O module
//!
//! Collaborator wrappers around storage: they honor fixed contracts
//! (degrade to empty results on failure, never raise into the core).
//!
//! # Components
//!
//! - `reader` - sales data line loader with encoding fallback
//! - `catalog` - product catalog JSON loader
//! - `enriched_writer` - pipe-delimited enriched output writer

pub mod catalog;
pub mod enriched_writer;
pub mod reader;

pub use catalog::load_catalog;
pub use enriched_writer::{write_enriched, write_enriched_file};
pub use reader::read_sales_data;
