//! Sales Analytics Engine CLI
//!
//! Command-line interface for the batch sales analytics pipeline.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data/sales_data.txt --catalog data/catalog.json
//! cargo run -- data/sales_data.txt --region North --min-amount 10 --max-amount 500
//! cargo run -- data/sales_data.txt --interactive
//! ```
//!
//! The program reads pipe-delimited transaction records, validates and
//! optionally filters them, computes the sales aggregates, enriches the
//! records against the product catalog, writes the enriched data file,
//! and writes the text report.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Unanticipated failure (reported with its cause, never a panic)

use anyhow::Context;
use sales_analytics_engine::cli;
use sales_analytics_engine::core::{
    parse_transactions, validate_and_filter, AnalyticsPipeline, FilterParams, PipelineConfig,
};
use sales_analytics_engine::io::read_sales_data;
use std::process;

fn run() -> anyhow::Result<()> {
    let args = cli::parse_args();

    // Filter parameters come from the prompt in interactive mode,
    // otherwise from the flags. The prompt shows the regions and amount
    // range from an unfiltered validation pass before asking.
    let filter = if args.interactive {
        let raw_lines = read_sales_data(&args.input_file);
        let records = parse_transactions(&raw_lines);
        let preview = validate_and_filter(records, &FilterParams::default());
        cli::collect_filter_params(&preview.summary)
    } else {
        args.filter_params()
    };

    let pipeline = AnalyticsPipeline::new(PipelineConfig {
        input_file: args.input_file,
        catalog_file: args.catalog_file,
        enriched_out: args.enriched_out,
        report_out: args.report_out,
        filter,
        top_n: args.top_n,
        low_threshold: args.low_threshold,
    });

    pipeline.run().context("analytics pipeline failed")?;
    Ok(())
}

fn main() {
    // Top-level boundary: anything unanticipated is reported with its
    // cause chain and the process exits cleanly instead of panicking.
    if let Err(e) = run() {
        eprintln!("An error occurred during execution.");
        eprintln!("Error details: {e:#}");
        process::exit(1);
    }
}
