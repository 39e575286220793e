//! Pipeline orchestration
//!
//! Sequences the full analytics run: load -> parse -> validate/filter ->
//! aggregate -> fetch catalog -> enrich -> persist enriched output ->
//! generate report. Each stage runs to completion before the next
//! begins; no state survives across runs.
//!
//! Collaborator I/O failures (unreadable input, missing catalog, output
//! write errors) degrade with a log line and the run continues.
//! Anything unanticipated propagates to the binary's top-level
//! boundary.

use crate::core::aggregate::{
    customer_analysis, daily_sales_trend, find_peak_sales_day, low_performing_products,
    region_wise_sales, top_selling_products, total_revenue,
};
use crate::core::enrich::{enrich_transactions, EnrichmentStats};
use crate::core::report::{generate_report, money};
use crate::core::parser::parse_transactions;
use crate::core::validator::{validate_and_filter, FilterParams, FilterSummary};
use crate::io::{load_catalog, read_sales_data, write_enriched_file};
use crate::types::{AnalyticsError, ProductMapping, ValidatedTransaction};
use std::fs;
use std::path::PathBuf;

const BANNER: &str =
    "======================================================================";

/// Everything one pipeline run needs to know
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_file: PathBuf,

    /// Catalog document for enrichment; `None` runs enrichment against
    /// an empty mapping (every record unmatched)
    pub catalog_file: Option<PathBuf>,

    pub enriched_out: PathBuf,
    pub report_out: PathBuf,
    pub filter: FilterParams,
    pub top_n: usize,
    pub low_threshold: i64,
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub summary: FilterSummary,
    pub enrichment: EnrichmentStats,
    pub report: String,
}

/// One-shot analytics pipeline
///
/// Holds no state between runs; every `run` reprocesses the full input
/// in memory.
pub struct AnalyticsPipeline {
    config: PipelineConfig,
}

impl AnalyticsPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        AnalyticsPipeline { config }
    }

    /// Execute the full pipeline, printing step progress
    pub fn run(&self) -> Result<PipelineOutcome, AnalyticsError> {
        println!("{BANNER}");
        println!("SALES ANALYTICS SYSTEM");
        println!("{BANNER}");

        println!("[1/9] Reading sales data...");
        let raw_lines = read_sales_data(&self.config.input_file);
        println!("- Read {} data lines", raw_lines.len());

        println!("[2/9] Parsing and cleaning data...");
        let records = parse_transactions(&raw_lines);
        println!("- Parsed {} records", records.len());

        println!("[3/9] Validating transactions...");
        let outcome = validate_and_filter(records, &self.config.filter);
        let summary = outcome.summary.clone();
        self.print_filter_summary(&summary);
        let transactions = outcome.transactions;

        println!("[4/9] Analyzing sales data...");
        self.print_analysis(&transactions);

        println!("[5/9] Loading product catalog...");
        let products = match &self.config.catalog_file {
            Some(path) => load_catalog(path),
            None => {
                println!("- No catalog supplied, enrichment will not match");
                Vec::new()
            }
        };
        println!("- Loaded {} catalog products", products.len());

        println!("[6/9] Enriching sales data...");
        let mapping = ProductMapping::from_products(products);
        let (enriched, stats) = enrich_transactions(&transactions, &mapping);
        println!(
            "- Enriched {}/{} transactions ({:.2}%)",
            stats.matched, stats.total, stats.success_rate
        );

        println!("[7/9] Saving enriched data...");
        match write_enriched_file(&self.config.enriched_out, &enriched) {
            Ok(()) => println!("- Saved to: {}", self.config.enriched_out.display()),
            Err(e) => eprintln!("Failed to save enriched data: {e}"),
        }

        println!("[8/9] Generating report...");
        let report = generate_report(
            &transactions,
            &enriched,
            self.config.top_n,
            self.config.low_threshold,
        );

        match self.write_report(&report) {
            Ok(()) => println!("- Report saved to: {}", self.config.report_out.display()),
            Err(e) => eprintln!("Failed to save report: {e}"),
        }

        println!("[9/9] Process complete");
        println!("{BANNER}");

        Ok(PipelineOutcome {
            summary,
            enrichment: stats,
            report,
        })
    }

    fn print_filter_summary(&self, summary: &FilterSummary) {
        let regions: Vec<&str> = summary.regions.iter().map(|s| s.as_str()).collect();
        println!("- Available regions: {}", regions.join(", "));
        if let Some((min, max)) = summary.amount_range {
            println!("- Transaction amount range: {} to {}", money(min), money(max));
        }
        if summary.filtered_by_region > 0 {
            println!("- Removed by region filter: {}", summary.filtered_by_region);
        }
        if summary.filtered_by_amount > 0 {
            println!("- Removed by amount filter: {}", summary.filtered_by_amount);
        }
        println!(
            "- Valid: {} | Invalid: {}",
            summary.final_count, summary.invalid
        );
    }

    /// Headline aggregate figures for the interactive run
    ///
    /// Uses the same aggregation layer as the report, so the figures
    /// shown here always match the persisted report.
    fn print_analysis(&self, transactions: &[ValidatedTransaction]) {
        println!("- Total revenue: {}", money(total_revenue(transactions)));

        if let Some(top_region) = region_wise_sales(transactions).first() {
            println!(
                "- Leading region: {} ({:.2}%)",
                top_region.region, top_region.percentage
            );
        }
        if let Some(top_product) = top_selling_products(transactions, self.config.top_n).first() {
            println!(
                "- Best seller: {} ({} units)",
                top_product.product_name, top_product.total_quantity
            );
        }
        if let Some(top_customer) = customer_analysis(transactions).first() {
            println!(
                "- Top customer: {} ({})",
                top_customer.customer_id,
                money(top_customer.total_spent)
            );
        }
        let trend = daily_sales_trend(transactions);
        println!("- Active days: {}", trend.len());
        if let Some(peak) = find_peak_sales_day(transactions) {
            println!("- Peak day: {} ({})", peak.date, money(peak.revenue));
        }
        let low = low_performing_products(transactions, self.config.low_threshold);
        println!("- Low performing products: {}", low.len());
    }

    fn write_report(&self, report: &str) -> Result<(), AnalyticsError> {
        let path = &self.config.report_out;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AnalyticsError::report(format!("{}: {e}", path.display())))?;
            }
        }
        fs::write(path, report)
            .map_err(|e| AnalyticsError::report(format!("{}: {e}", path.display())))?;
        Ok(())
    }
}
